use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// One record from the feed's `feed_info.txt`.
///
/// Only `feed_version` matters to the reporter; the remaining columns
/// are kept as-is for embedders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedInfo {
    #[serde(default)]
    pub feed_version: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Read-only access to feed metadata, queried once per summary build.
pub trait FeedInfoSource {
    fn feed_info(&self) -> Vec<FeedInfo>;
}

/// In-memory source for embedders that already hold the records.
#[derive(Debug, Clone, Default)]
pub struct StaticFeedInfo(pub Vec<FeedInfo>);

impl FeedInfoSource for StaticFeedInfo {
    fn feed_info(&self) -> Vec<FeedInfo> {
        self.0.clone()
    }
}

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

/// A console write target. Receives the text to emit and whether the
/// write should overwrite the current terminal line instead of starting
/// a new one.
#[derive(Clone)]
pub struct LogSink(Arc<dyn Fn(&str, bool) + Send + Sync>);

impl LogSink {
    pub fn new(sink: impl Fn(&str, bool) + Send + Sync + 'static) -> Self {
        Self(Arc::new(sink))
    }

    /// A sink that discards everything.
    pub fn noop() -> Self {
        Self::new(|_, _| {})
    }

    pub fn call(&self, text: &str, overwrite: bool) {
        (self.0)(text, overwrite);
    }

    /// Whether two handles share the same underlying sink.
    pub fn same_sink(&self, other: &LogSink) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogSink")
    }
}

/// Reporter-relevant subset of the tool configuration.
///
/// Constructed and validated by the calling pipeline; deserializes from
/// the tool's camelCase JSON configuration. `log_function` cannot come
/// from a config file and is only ever set programmatically.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(skip)]
    pub log_function: Option<LogSink>,
    #[serde(default = "default_version")]
    pub gtfs_to_html_version: String,
    #[serde(default)]
    pub agencies: Vec<Agency>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: default_verbose(),
            log_function: None,
            gtfs_to_html_version: default_version(),
            agencies: Vec::new(),
        }
    }
}

fn default_verbose() -> bool {
    true
}

fn default_version() -> String {
    "unknown".to_string()
}

/// One configured agency entry. The reporter only cares about where the
/// feed came from; the key is carried along for embedders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    #[serde(default)]
    pub agency_key: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Agency {
    /// Source label for summaries: the url when present, the local path
    /// otherwise, `None` when the entry carries neither.
    pub fn source(&self) -> Option<String> {
        if let Some(url) = &self.url {
            return Some(url.clone());
        }
        self.path.as_ref().map(|path| path.display().to_string())
    }
}

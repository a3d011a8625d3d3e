use chrono::{SecondsFormat, Utc};

use crate::config::Config;
use crate::feed_info::FeedInfoSource;
use crate::stats::OutputStats;

const UNKNOWN_FEED_VERSION: &str = "Unknown";

/// Build the plain-text run summary.
///
/// One line per fact: feed version, tool version, generation timestamp,
/// the six counts, and a `Source:` line per configured agency. When the
/// run produced warnings they are appended verbatim under a `Warnings:`
/// header.
pub fn generate_log_text(
    stats: &OutputStats,
    config: &Config,
    feed_info: &dyn FeedInfoSource,
) -> String {
    let feed_version = feed_info
        .feed_info()
        .first()
        .and_then(|info| info.feed_version.clone())
        .filter(|version| !version.is_empty())
        .unwrap_or_else(|| UNKNOWN_FEED_VERSION.to_string());

    let mut lines = vec![
        format!("Feed Version: {feed_version}"),
        format!("GTFS-to-HTML Version: {}", config.gtfs_to_html_version),
        format!(
            "Date Generated: {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        format!("Timetable Page Count: {}", stats.timetable_pages),
        format!("Timetable Count: {}", stats.timetables),
        format!("Calendar Service ID Count: {}", stats.calendars),
        format!("Route Count: {}", stats.routes),
        format!("Trip Count: {}", stats.trips),
        format!("Stop Count: {}", stats.stops),
    ];

    lines.extend(
        config
            .agencies
            .iter()
            .filter_map(|agency| agency.source().map(|source| format!("Source: {source}"))),
    );

    if !stats.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings:".to_string());
        lines.extend(stats.warnings.iter().cloned());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Agency;
    use crate::feed_info::{FeedInfo, StaticFeedInfo};
    use std::path::PathBuf;

    fn sample_stats() -> OutputStats {
        OutputStats {
            timetable_pages: 2,
            timetables: 3,
            calendars: 1,
            routes: 5,
            trips: 10,
            stops: 20,
            warnings: Vec::new(),
        }
    }

    fn sample_config() -> Config {
        Config {
            gtfs_to_html_version: "2.10.1".to_string(),
            agencies: vec![Agency {
                agency_key: None,
                url: Some("http://example.com/gtfs.zip".to_string()),
                path: None,
            }],
            ..Config::default()
        }
    }

    #[test]
    fn lists_counts_and_sources() {
        let text = generate_log_text(&sample_stats(), &sample_config(), &StaticFeedInfo::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Feed Version: Unknown");
        assert_eq!(lines[1], "GTFS-to-HTML Version: 2.10.1");
        assert!(lines[2].starts_with("Date Generated: "));
        assert!(lines.contains(&"Timetable Page Count: 2"));
        assert!(lines.contains(&"Timetable Count: 3"));
        assert!(lines.contains(&"Calendar Service ID Count: 1"));
        assert!(lines.contains(&"Route Count: 5"));
        assert!(lines.contains(&"Trip Count: 10"));
        assert!(lines.contains(&"Stop Count: 20"));
        assert!(lines.contains(&"Source: http://example.com/gtfs.zip"));
        assert!(!text.contains("Warnings:"));
    }

    #[test]
    fn appends_warning_section_when_present() {
        let mut stats = sample_stats();
        stats.warnings = vec!["bad row".to_string()];

        let text = generate_log_text(&stats, &sample_config(), &StaticFeedInfo::default());

        assert!(text.ends_with("\n\nWarnings:\nbad row"));
    }

    #[test]
    fn uses_first_feed_info_version() {
        let source = StaticFeedInfo(vec![
            FeedInfo {
                feed_version: Some("2024-05".to_string()),
                ..FeedInfo::default()
            },
            FeedInfo {
                feed_version: Some("ignored".to_string()),
                ..FeedInfo::default()
            },
        ]);

        let text = generate_log_text(&sample_stats(), &sample_config(), &source);
        assert!(text.starts_with("Feed Version: 2024-05\n"));
    }

    #[test]
    fn empty_feed_version_falls_back_to_unknown() {
        let source = StaticFeedInfo(vec![FeedInfo {
            feed_version: Some(String::new()),
            ..FeedInfo::default()
        }]);

        let text = generate_log_text(&sample_stats(), &sample_config(), &source);
        assert!(text.starts_with("Feed Version: Unknown\n"));
    }

    #[test]
    fn agency_path_used_when_url_absent() {
        let mut config = sample_config();
        config.agencies = vec![
            Agency {
                agency_key: None,
                url: None,
                path: Some(PathBuf::from("/data/gtfs")),
            },
            Agency::default(),
        ];

        let text = generate_log_text(&sample_stats(), &config, &StaticFeedInfo::default());

        assert!(text.contains("Source: /data/gtfs"));
        // The keyless, pathless agency contributes nothing.
        assert_eq!(text.matches("Source: ").count(), 1);
    }
}

//! Console reporting for the GTFS-to-HTML timetable generator.
//!
//! Formats status lines, warnings, errors, a summary stats table, and a
//! single-line text progress bar. Everything here is a pure formatter or
//! a thin wrapper over standard output; the generation pipeline computes
//! the numbers and decides when to print them.
//!
//! Output routing is chosen once from the configuration: quiet mode
//! silences status output entirely, and a caller-supplied
//! [`LogSink`](config::LogSink) takes full control of where text goes.

pub mod config;
pub mod feed_info;
pub mod logger;
pub mod progress;
pub mod stats;
pub mod style;
pub mod summary;
pub mod table;

pub use config::{Agency, Config, LogSink};
pub use feed_info::{FeedInfo, FeedInfoSource, StaticFeedInfo};
pub use logger::{log, log_error, log_warning};
pub use progress::{
    generate_progress_bar_string, progress_bar, ProgressBar, ProgressBarError, DEFAULT_BAR_SIZE,
};
pub use stats::OutputStats;
pub use style::{format_error, format_warning};
pub use summary::generate_log_text;
pub use table::{log_stats, render_stats_table};

#[cfg(test)]
pub(crate) mod testutil;

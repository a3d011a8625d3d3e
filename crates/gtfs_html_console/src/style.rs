use std::fmt;

use colored::{ColoredString, Colorize};

/// Emphasis category for console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleKind {
    Warning,
    Error,
}

fn style(text: &str, kind: StyleKind) -> ColoredString {
    match kind {
        StyleKind::Warning => text.yellow(),
        StyleKind::Error => text.red(),
    }
}

/// Format a warning with its label underlined and the whole line in
/// warning colors.
pub fn format_warning(text: &str) -> String {
    format!(
        "{} {}",
        style("Warning:", StyleKind::Warning).underline(),
        style(text, StyleKind::Warning)
    )
}

/// Format an error message for the console.
///
/// Accepts anything printable, so both plain strings and error values
/// work. A leading literal `Error: ` is stripped once so messages that
/// already carry the label are not labeled twice.
pub fn format_error(error: impl fmt::Display) -> String {
    let message = error.to_string();
    let message = message.strip_prefix("Error: ").unwrap_or(&message);
    format!(
        "{} {}",
        style("Error:", StyleKind::Error).underline(),
        style(message, StyleKind::Error)
    )
}

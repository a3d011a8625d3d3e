use crate::config::Config;
use crate::logger::log;
use crate::stats::OutputStats;

const ITEM_WIDTH: usize = 40;
const COUNT_WIDTH: usize = 20;

/// Select the stats-table writer.
///
/// A custom sink suppresses the table entirely: embedders that reroute
/// logging want the structured counts, not a rendered table. Otherwise
/// the table goes through the status-line writer as one
/// non-overwriting write, so quiet mode drops it as well.
pub fn log_stats(config: &Config) -> Box<dyn Fn(&OutputStats) + Send + Sync> {
    if config.log_function.is_some() {
        return Box::new(|_stats| {});
    }
    let sink = log(config);
    Box::new(move |stats| sink.call(&render_stats_table(stats), false))
}

/// Render the fixed two-column table of run counts.
pub fn render_stats_table(stats: &OutputStats) -> String {
    let rows: [(&str, u64); 7] = [
        ("📄 Timetable Pages", stats.timetable_pages),
        ("🕑 Timetables", stats.timetables),
        ("📅 Calendar Service IDs", stats.calendars),
        ("🔄 Routes", stats.routes),
        ("🚍 Trips", stats.trips),
        ("🛑 Stops", stats.stops),
        ("⚠ Warnings", stats.warnings.len() as u64),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border('┌', '┬', '┐'));
    lines.push(row("Item", "Count"));
    lines.push(border('├', '┼', '┤'));
    for (label, count) in rows {
        lines.push(row(label, &count.to_string()));
    }
    lines.push(border('└', '┴', '┘'));
    lines.join("\n")
}

fn border(left: char, mid: char, right: char) -> String {
    format!(
        "{left}{}{mid}{}{right}",
        "─".repeat(ITEM_WIDTH),
        "─".repeat(COUNT_WIDTH)
    )
}

fn row(item: &str, count: &str) -> String {
    format!("│{}│{}│", cell(item, ITEM_WIDTH), cell(count, COUNT_WIDTH))
}

// Pads by char count; wide icon glyphs may shift a border by a column
// in some fonts.
fn cell(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count() + 1);
    format!(" {text}{}", " ".repeat(fill))
}

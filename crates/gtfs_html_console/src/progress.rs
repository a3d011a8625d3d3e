use thiserror::Error;

use crate::config::{Config, LogSink};
use crate::logger::{log, log_warning};

/// Glyph count used for `{bar}` substitutions.
pub const DEFAULT_BAR_SIZE: usize = 40;

const FILLED: &str = "=";
const EMPTY: &str = "-";

const VALUE_TOKEN: &str = "{value}";
const TOTAL_TOKEN: &str = "{total}";
const BAR_TOKEN: &str = "{bar}";

/// Contract violations in bar-glyph generation. These indicate caller
/// bugs, not recoverable runtime conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressBarError {
    #[error("progress bar total must be greater than zero")]
    ZeroTotal,
    #[error("progress bar size must be greater than zero")]
    ZeroSize,
}

/// Single-line text progress bar updated in place.
///
/// Dropping the handle simply stops the updates; there is no terminal
/// state beyond the counter.
#[derive(Debug)]
pub struct ProgressBar {
    state: Option<BarState>,
}

#[derive(Debug)]
struct BarState {
    format: String,
    total: u64,
    progress: u64,
    logger: LogSink,
    warning: LogSink,
}

/// Create a progress bar for `total` steps and render it once.
///
/// Returns `None` when `total` is zero: there is nothing to track and
/// the caller must not expect a handle. In quiet mode a handle is
/// returned but every operation on it is a no-op.
pub fn progress_bar(format: &str, total: u64, config: &Config) -> Option<ProgressBar> {
    if !config.verbose {
        return Some(ProgressBar { state: None });
    }
    if total == 0 {
        return None;
    }
    let state = BarState {
        format: format.to_string(),
        total,
        progress: 0,
        logger: log(config),
        warning: log_warning(config),
    };
    state.render();
    Some(ProgressBar { state: Some(state) })
}

impl ProgressBar {
    /// Advance by one step and redraw the line in place.
    pub fn increment(&mut self) {
        if let Some(state) = &mut self.state {
            state.progress += 1;
            state.render();
        }
    }

    /// Write an out-of-band message so it survives the line-clearing of
    /// the next redraw: the text goes through the warning writer,
    /// followed by one blank status line.
    pub fn interrupt(&self, text: &str) {
        if let Some(state) = &self.state {
            state.warning.call(text, false);
            state.logger.call("", false);
        }
    }

    /// Steps completed so far.
    pub fn progress(&self) -> u64 {
        self.state.as_ref().map_or(0, |state| state.progress)
    }
}

impl BarState {
    fn render(&self) {
        self.logger.call(&self.render_progress_string(), true);
    }

    /// Substitute `{value}`, `{total}` and `{bar}` into the format
    /// string. First occurrence only; repeated tokens keep their later
    /// occurrences verbatim.
    fn render_progress_string(&self) -> String {
        let bar = generate_progress_bar_string(self.total, self.progress, DEFAULT_BAR_SIZE)
            .expect("total checked at creation");
        self.format
            .replacen(VALUE_TOKEN, &self.progress.to_string(), 1)
            .replacen(TOTAL_TOKEN, &self.total.to_string(), 1)
            .replacen(BAR_TOKEN, &bar, 1)
    }
}

/// Build the glyph run for a bar of `size` cells.
///
/// Progress past `total` widens the bar to `size + 2` filled cells so
/// overshoot stays visible instead of clamping to 100%.
pub fn generate_progress_bar_string(
    total: u64,
    progress: u64,
    size: usize,
) -> Result<String, ProgressBarError> {
    if total == 0 {
        return Err(ProgressBarError::ZeroTotal);
    }
    if size == 0 {
        return Err(ProgressBarError::ZeroSize);
    }
    if progress > total {
        return Ok(FILLED.repeat(size + 2));
    }
    let filled = ((size as f64) * (progress as f64) / (total as f64)).round() as usize;
    Ok(format!(
        "{}{}",
        FILLED.repeat(filled),
        EMPTY.repeat(size - filled)
    ))
}

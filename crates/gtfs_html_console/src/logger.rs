use std::io::{self, IsTerminal, Write};

use crate::config::{Config, LogSink};
use crate::style::{format_error, format_warning};

/// Clear the current line and return the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Select the status-line writer for this run.
///
/// Quiet mode wins over everything else; after that a caller-supplied
/// `log_function` takes full control of output routing. The default
/// writer appends newline-separated text, or rewrites the current line
/// in place when asked to overwrite on an interactive terminal.
pub fn log(config: &Config) -> LogSink {
    if !config.verbose {
        return LogSink::noop();
    }
    if let Some(sink) = &config.log_function {
        return sink.clone();
    }
    LogSink::new(write_stdout)
}

/// Select the warning writer: the custom sink when set, otherwise
/// stdout with warning emphasis. Warnings are not silenced by quiet
/// mode.
pub fn log_warning(config: &Config) -> LogSink {
    if let Some(sink) = &config.log_function {
        return sink.clone();
    }
    LogSink::new(|text, _overwrite| {
        let mut out = io::stdout().lock();
        let _ = write!(out, "\n{}\n", format_warning(text));
    })
}

/// Select the error writer: the custom sink when set, otherwise stdout
/// with error emphasis.
pub fn log_error(config: &Config) -> LogSink {
    if let Some(sink) = &config.log_function {
        return sink.clone();
    }
    LogSink::new(|text, _overwrite| {
        let mut out = io::stdout().lock();
        let _ = write!(out, "\n{}\n", format_error(text));
    })
}

fn write_stdout(text: &str, overwrite: bool) {
    let interactive = io::stdout().is_terminal();
    let mut out = io::stdout().lock();
    let _ = out.write_all(terminal_payload(text, overwrite, interactive).as_bytes());
    // Overwrite renders carry no trailing newline, so the line only
    // shows up once the stream is flushed.
    let _ = out.flush();
}

/// Bytes for one default write: an in-place rewrite on a live terminal,
/// a newline-separated append everywhere else.
fn terminal_payload(text: &str, overwrite: bool, interactive: bool) -> String {
    if overwrite && interactive {
        format!("{CLEAR_LINE}{text}")
    } else {
        format!("\n{text}")
    }
}

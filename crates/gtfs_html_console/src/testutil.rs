//! Shared test utilities. Only compiled in test builds.

use std::sync::{Arc, Mutex};

use crate::config::LogSink;

/// Records every `(text, overwrite)` pair routed through its sink.
///
/// `sink()` always hands out the same underlying sink, so identity
/// checks with [`LogSink::same_sink`] work as expected.
#[derive(Clone)]
pub struct CapturingSink {
    calls: Arc<Mutex<Vec<(String, bool)>>>,
    sink: LogSink,
}

impl CapturingSink {
    pub fn new() -> Self {
        let calls: Arc<Mutex<Vec<(String, bool)>>> = Arc::default();
        let recorded = Arc::clone(&calls);
        let sink = LogSink::new(move |text, overwrite| {
            recorded
                .lock()
                .expect("sink lock")
                .push((text.to_string(), overwrite));
        });
        Self { calls, sink }
    }

    pub fn sink(&self) -> LogSink {
        self.sink.clone()
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().expect("sink lock").clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls().into_iter().map(|(text, _)| text).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().expect("sink lock").is_empty()
    }
}

use std::sync::{Arc, Mutex};

use mdwatch::report::ReportSink;

/// A sink that records emitted status lines instead of printing them.
///
/// Clone the handle before passing the sink to the monitor; the lines remain
/// readable after `run()` consumes the sink.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle onto the recorded lines.
    pub fn handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lines)
    }
}

impl ReportSink for RecordingSink {
    fn emit(&mut self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

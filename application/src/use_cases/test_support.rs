//! Test doubles shared by use case tests

use crate::ports::clipboard::{ClipboardError, ClipboardPort};

/// Records every write; optionally fails instead.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("rejected".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

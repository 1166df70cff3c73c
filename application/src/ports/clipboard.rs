//! Clipboard port for the session export.
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`ClipboardPort`] - defined here in the application layer
//! - **Adapter**: `SystemClipboard` - implemented in the infrastructure layer
//!
//! # Built-in Implementations
//!
//! - [`NoClipboard`] - Always fails with [`ClipboardError::Unavailable`]

use thiserror::Error;

/// Error writing to the clipboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, missing display server)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was opened but rejected the text
    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Destination for exported text.
///
/// Methods take `&mut self` and the trait carries no `Send` bound: some
/// platform clipboards must stay on the thread that opened them, and the
/// controller that owns the port never leaves the event-loop task.
pub trait ClipboardPort {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A clipboard that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl ClipboardPort for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("clipboard disabled".to_string()))
    }
}

impl<C: ClipboardPort + ?Sized> ClipboardPort for Box<C> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text)
    }
}

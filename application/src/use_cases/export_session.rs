//! Export Session use case
//!
//! Serializes a read-only snapshot of the session to pretty-printed JSON
//! and places it on the clipboard. One shot, no retry.

use crate::ports::clipboard::{ClipboardError, ClipboardPort};
use panel_domain::Session;
use thiserror::Error;
use tracing::{info, warn};

/// Error during export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Output of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    /// The exact text placed on the clipboard
    pub json: String,
    pub participants: usize,
}

/// Use case for copying the session summary to the clipboard
pub struct ExportSessionUseCase;

impl ExportSessionUseCase {
    pub fn execute<C: ClipboardPort + ?Sized>(
        session: &Session,
        clipboard: &mut C,
    ) -> Result<ExportOutput, ExportError> {
        let snapshot = session.snapshot();
        let json = snapshot.to_pretty_json()?;

        if let Err(e) = clipboard.write_text(&json) {
            warn!("Export could not reach the clipboard: {}", e);
            return Err(e.into());
        }

        info!(
            bytes = json.len(),
            phase = %snapshot.phase,
            "Session exported to clipboard"
        );
        Ok(ExportOutput {
            json,
            participants: snapshot.participants.len(),
        })
    }
}

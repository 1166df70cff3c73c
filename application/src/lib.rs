//! Application layer for panel-sim
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    clipboard::{ClipboardError, ClipboardPort, NoClipboard},
    ui_event::{PhaseEnteredEvent, UiEvent, WelcomeInfo},
};
pub use use_cases::export_session::{ExportError, ExportOutput, ExportSessionUseCase};
pub use use_cases::session_command::{CommandParseError, SessionCommand};
pub use use_cases::session_controller::{CommandAction, SessionController};

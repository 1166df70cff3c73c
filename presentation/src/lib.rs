//! Presentation layer for panel-sim
//!
//! This crate contains the CLI definition, console output for the
//! non-interactive flags, and the ratatui TUI that drives a session.

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::TuiConfig;
pub use output::console::ConsoleFormatter;
pub use tui::TuiApp;

//! Infrastructure layer for panel-sim
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading, and the
//! log file sink.

pub mod clipboard;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use clipboard::SystemClipboard;
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileDurationsConfig, FileLoggingConfig,
    FileSessionConfig, FileTuiConfig,
};
pub use logging::{LogGuard, LoggingError, default_log_path, init_file_logging};

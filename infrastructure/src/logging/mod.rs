//! Logging infrastructure: file sink for `tracing`.
//!
//! The TUI owns the terminal, so log output goes to a file through a
//! non-blocking `tracing-appender` writer. The returned [`LogGuard`] must be
//! held until exit; dropping it flushes buffered lines.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// File name used inside the platform data directory
const LOG_FILE_NAME: &str = "panel-sim.log";

/// Error initializing file logging
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Logging already initialized: {0}")]
    Init(String),
}

/// Keeps the background writer alive
#[must_use = "dropping the guard stops the log writer"]
pub struct LogGuard {
    _worker: WorkerGuard,
    path: PathBuf,
}

impl LogGuard {
    /// Where log lines are written
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<data_dir>/panel-sim/panel-sim.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("panel-sim").join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Install the global subscriber writing to `path`.
pub fn init_file_logging(path: &Path, filter: EnvFilter) -> Result<LogGuard, LoggingError> {
    let file = open_log_file(path).map_err(|source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let (writer, worker) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(LogGuard {
        _worker: worker,
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_log_path_names_the_app() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("panel-sim/panel-sim.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parents_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("run.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }
}

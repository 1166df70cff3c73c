//! Configuration file loading for panel-sim
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PANEL_SIM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./panel-sim.toml` or `./.panel-sim.toml`
//! 4. Global: `<config_dir>/panel-sim/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDurationsConfig, FileLoggingConfig, FileSessionConfig, FileTuiConfig,
};
pub use loader::{ConfigError, ConfigLoader};

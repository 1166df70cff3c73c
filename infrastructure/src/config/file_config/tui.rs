//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// How long status-bar flash messages stay visible
    pub flash_seconds: u64,
    /// Redraw interval for flash expiry and clock display
    pub refresh_ms: u64,
}

impl FileTuiConfig {
    pub const FLASH_RANGE: (u64, u64) = (1, 30);
    pub const REFRESH_RANGE: (u64, u64) = (50, 1000);

    pub fn flash_seconds(&self) -> u64 {
        self.flash_seconds
            .clamp(Self::FLASH_RANGE.0, Self::FLASH_RANGE.1)
    }

    pub fn refresh_ms(&self) -> u64 {
        self.refresh_ms
            .clamp(Self::REFRESH_RANGE.0, Self::REFRESH_RANGE.1)
    }
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            flash_seconds: 3,
            refresh_ms: 250,
        }
    }
}

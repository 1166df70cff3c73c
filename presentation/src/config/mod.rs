//! Presentation-level configuration
//!
//! Timing knobs for the TUI loop. Values arrive already clamped from the
//! config file layer.

use std::time::Duration;

/// TUI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiConfig {
    /// How long a flash message stays in the status bar
    pub flash_seconds: u64,
    /// Redraw interval used to expire flash messages
    pub refresh_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            flash_seconds: 3,
            refresh_ms: 250,
        }
    }
}

impl TuiConfig {
    pub fn flash(&self) -> Duration {
        Duration::from_secs(self.flash_seconds)
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.refresh_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.flash(), Duration::from_secs(3));
        assert_eq!(config.refresh(), Duration::from_millis(250));
    }

    #[test]
    fn test_zero_refresh_is_not_a_busy_loop() {
        let config = TuiConfig {
            flash_seconds: 1,
            refresh_ms: 0,
        };
        assert_eq!(config.refresh(), Duration::from_millis(1));
    }
}

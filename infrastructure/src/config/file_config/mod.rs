//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Numeric fields stay wide and unclamped here so that [`FileConfig::validate`]
//! can report what will be adjusted.

mod durations;
mod logging;
mod session;
mod tui;

pub use durations::FileDurationsConfig;
pub use logging::FileLoggingConfig;
pub use session::FileSessionConfig;
pub use tui::FileTuiConfig;

use panel_application::SessionConfig;
use panel_domain::{Case, ConfigIssue, ConfigIssueCode, PhaseDurations, Roster, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Case, roster size, seed
    pub session: FileSessionConfig,
    /// Phase durations in minutes
    pub durations: FileDurationsConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Nothing here is fatal: out-of-range numbers are clamped and an
    /// unknown case falls back to the first catalog entry.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Roster size
        let (min, max) = (Roster::MIN_SIZE as i64, Roster::MAX_SIZE as i64);
        if !(min..=max).contains(&self.session.participants) {
            issues.push(ConfigIssue::out_of_range(
                "session.participants",
                self.session.participants,
                min,
                max,
            ));
        }

        // 2. Phase durations
        let (min, max) = (
            i64::from(PhaseDurations::MIN_MINUTES),
            i64::from(PhaseDurations::MAX_MINUTES),
        );
        for (field, value) in self.durations.entries() {
            if !(min..=max).contains(&value) {
                issues.push(ConfigIssue::out_of_range(field, value, min, max));
            }
        }

        // 3. Case id
        if let Some(case) = &self.session.case
            && Case::find(case).is_err()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::UnknownCase {
                    value: case.clone(),
                },
                message: format!(
                    "session.case: unknown case '{}', falling back to '{}'",
                    case,
                    Case::default_case().id
                ),
            });
        }

        // 4. TUI timings
        let checks = [
            (
                "tui.flash_seconds",
                self.tui.flash_seconds,
                FileTuiConfig::FLASH_RANGE,
            ),
            (
                "tui.refresh_ms",
                self.tui.refresh_ms,
                FileTuiConfig::REFRESH_RANGE,
            ),
        ];
        for (field, value, (min, max)) in checks {
            if !(min..=max).contains(&value) {
                issues.push(ConfigIssue::out_of_range(
                    field,
                    i64::try_from(value).unwrap_or(i64::MAX),
                    min as i64,
                    max as i64,
                ));
            }
        }

        issues
    }

    /// Session parameters for the application layer
    pub fn to_session_config(&self) -> SessionConfig {
        let case = self
            .session
            .case
            .clone()
            .unwrap_or_else(|| Case::default_case().id.to_string());
        SessionConfig::new(
            case,
            self.session.roster_size(),
            self.durations.to_phase_durations(),
        )
        .with_seed(self.session.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Phase;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
case = "selection_roi"
participants = 5
seed = 11

[durations]
reading = 2
self = 4
discussion = 15
summary = 3

[tui]
flash_seconds = 5
refresh_ms = 200

[logging]
file = "/tmp/panel-sim.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.case.as_deref(), Some("selection_roi"));
        assert_eq!(config.durations.discussion, 15);
        assert_eq!(config.tui.flash_seconds(), 5);
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/panel-sim.log"));
        assert!(config.validate().is_empty());

        let session = config.to_session_config();
        assert_eq!(session.case_id(), "selection_roi");
        assert_eq!(session.participants(), 5);
        assert_eq!(session.seed(), Some(11));
        assert_eq!(session.durations().minutes(Phase::Statement), Some(4));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[durations]
discussion = 25
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.durations.discussion, 25);
        // Defaults should apply
        assert_eq!(config.durations.reading, 3);
        assert_eq!(config.session.participants, 6);
        assert_eq!(config.tui.refresh_ms, 250);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.session.case.is_none());
        assert!(config.logging.file.is_none());
        assert_eq!(config.to_session_config(), SessionConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_clamped_values() {
        let toml_str = r#"
[session]
participants = 20
case = "nope"

[durations]
self = 0
summary = 61

[tui]
refresh_ms = 5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 5);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));

        let fields: Vec<String> = issues
            .iter()
            .filter_map(|i| match &i.code {
                ConfigIssueCode::OutOfRange { field, .. } => Some(field.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(
            fields,
            vec![
                "session.participants",
                "durations.self",
                "durations.summary",
                "tui.refresh_ms"
            ]
        );
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::UnknownCase { value } if value == "nope"
        )));
        assert!(issues[0].message.contains("using 12"));
    }
}

//! Phase durations from TOML (`[durations]` section, minutes)

use panel_domain::PhaseDurations;
use serde::{Deserialize, Serialize};

/// Raw phase durations from TOML
///
/// Kept as signed integers so that out-of-range values survive parsing and
/// can be reported before they are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDurationsConfig {
    pub reading: i64,
    #[serde(rename = "self")]
    pub statement: i64,
    pub discussion: i64,
    pub summary: i64,
}

impl Default for FileDurationsConfig {
    fn default() -> Self {
        let defaults = PhaseDurations::default();
        let minutes = |phase| i64::from(defaults.minutes(phase).unwrap_or_default());
        Self {
            reading: minutes(panel_domain::Phase::Reading),
            statement: minutes(panel_domain::Phase::Statement),
            discussion: minutes(panel_domain::Phase::Discussion),
            summary: minutes(panel_domain::Phase::Summary),
        }
    }
}

impl FileDurationsConfig {
    /// `(field name, value)` pairs in phase order
    pub fn entries(&self) -> [(&'static str, i64); 4] {
        [
            ("durations.reading", self.reading),
            ("durations.self", self.statement),
            ("durations.discussion", self.discussion),
            ("durations.summary", self.summary),
        ]
    }

    /// Clamped domain durations
    pub fn to_phase_durations(&self) -> PhaseDurations {
        let clamp = |minutes: i64| {
            minutes.clamp(
                i64::from(PhaseDurations::MIN_MINUTES),
                i64::from(PhaseDurations::MAX_MINUTES),
            ) as u32
        };
        PhaseDurations::new(
            clamp(self.reading),
            clamp(self.statement),
            clamp(self.discussion),
            clamp(self.summary),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Phase;

    #[test]
    fn test_defaults_match_domain() {
        assert_eq!(
            FileDurationsConfig::default().to_phase_durations(),
            PhaseDurations::default()
        );
    }

    #[test]
    fn test_self_key_and_clamping() {
        let toml_str = r#"
[durations]
self = 8
discussion = 90
reading = 0
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let durations = config.durations.to_phase_durations();
        assert_eq!(durations.minutes(Phase::Statement), Some(8));
        assert_eq!(durations.minutes(Phase::Discussion), Some(60));
        assert_eq!(durations.minutes(Phase::Reading), Some(1));
        assert_eq!(durations.minutes(Phase::Summary), Some(4));
    }
}

//! Session configuration from TOML (`[session]` section)

use panel_domain::Roster;
use serde::{Deserialize, Serialize};

/// Raw session configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Case id from the catalog (first case when unset)
    pub case: Option<String>,
    /// Roster size, clamped to 3–12
    pub participants: i64,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            case: None,
            participants: Roster::DEFAULT_SIZE as i64,
            seed: None,
        }
    }
}

impl FileSessionConfig {
    /// Roster size as used by the session
    pub fn roster_size(&self) -> usize {
        Roster::clamp_size(usize::try_from(self.participants.max(0)).unwrap_or(usize::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_section() {
        let toml_str = r#"
[session]
case = "campaign_618"
participants = 8
seed = 7
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.case.as_deref(), Some("campaign_618"));
        assert_eq!(config.session.roster_size(), 8);
        assert_eq!(config.session.seed, Some(7));
    }

    #[test]
    fn test_roster_size_clamps() {
        let mut session = FileSessionConfig::default();
        session.participants = -1;
        assert_eq!(session.roster_size(), Roster::MIN_SIZE);
        session.participants = 99;
        assert_eq!(session.roster_size(), Roster::MAX_SIZE);
    }
}

//! Session configuration.
//!
//! [`SessionConfig`] is what the controller needs to build a fresh
//! [`Session`]: the initial case, roster size, phase durations and an
//! optional RNG seed for reproducible draws.

use panel_domain::{Case, PhaseDurations, Roster, Session};
use tracing::warn;

/// Initial session parameters.
///
/// Out-of-range values are accepted here and clamped when the session is
/// built; an unknown case id falls back to the first catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    case_id: String,
    participants: usize,
    durations: PhaseDurations,
    seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            case_id: Case::default_case().id.to_string(),
            participants: Roster::DEFAULT_SIZE,
            durations: PhaseDurations::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn new(case_id: impl Into<String>, participants: usize, durations: PhaseDurations) -> Self {
        Self {
            case_id: case_id.into(),
            participants,
            durations,
            seed: None,
        }
    }

    // ==================== Builder ====================

    pub fn with_case(mut self, case_id: impl Into<String>) -> Self {
        self.case_id = case_id.into();
        self
    }

    pub fn with_participants(mut self, participants: usize) -> Self {
        self.participants = participants;
        self
    }

    pub fn with_durations(mut self, durations: PhaseDurations) -> Self {
        self.durations = durations;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    // ==================== Accessors ====================

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn participants(&self) -> usize {
        self.participants
    }

    pub fn durations(&self) -> &PhaseDurations {
        &self.durations
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The configured case, or the default one when the id is unknown.
    pub fn resolve_case(&self) -> &'static Case {
        match Case::find(&self.case_id) {
            Ok(case) => case,
            Err(e) => {
                warn!("{}, falling back to '{}'", e, Case::default_case().id);
                Case::default_case()
            }
        }
    }

    /// Build a fresh session in `setup`.
    pub fn build_session(&self) -> Session {
        Session::new(self.resolve_case(), self.participants, self.durations)
    }
}

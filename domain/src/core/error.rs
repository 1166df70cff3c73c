//! Domain error types

use crate::phase::Phase;
use thiserror::Error;

/// Domain-level errors
///
/// Numeric bounds (roster size, durations, ratings) never produce an error:
/// they saturate to the nearest valid value. These variants cover requests
/// that reference something that does not exist or arrive in the wrong phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown case: {0}")]
    UnknownCase(String),

    #[error("Unknown participant: #{0}")]
    UnknownParticipant(u32),

    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("Phase '{0}' has no countdown")]
    UntimedPhase(Phase),

    #[error("{action} is not available during '{phase}'")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("Participant name cannot be empty")]
    EmptyName,
}

impl DomainError {
    /// Check if this error was caused by acting in the wrong phase
    pub fn is_wrong_phase(&self) -> bool {
        matches!(self, DomainError::WrongPhase { .. })
    }
}

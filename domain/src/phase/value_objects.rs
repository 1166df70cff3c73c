//! Phase value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One stage of a simulated group interview.
///
/// Progression is strictly linear:
///
/// ```text
/// setup → reading → self → discussion → summary → debrief
/// ```
///
/// Only a full reset moves backwards (to `setup`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Roster, case and durations are being prepared
    #[default]
    Setup,
    /// Candidates read the case
    Reading,
    /// Individual statements in speaking order
    #[serde(rename = "self")]
    Statement,
    /// Open group discussion
    Discussion,
    /// Group summary
    Summary,
    /// Session finished, facilitator debrief
    Debrief,
}

impl Phase {
    /// Phases that carry a countdown, in order.
    pub const TIMED: [Phase; 4] = [
        Phase::Reading,
        Phase::Statement,
        Phase::Discussion,
        Phase::Summary,
    ];

    /// The phase that follows this one, if any.
    ///
    /// `setup` has no forward transition (a session leaves it only by
    /// starting) and `debrief` is terminal.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Setup | Phase::Debrief => None,
            Phase::Reading => Some(Phase::Statement),
            Phase::Statement => Some(Phase::Discussion),
            Phase::Discussion => Some(Phase::Summary),
            Phase::Summary => Some(Phase::Debrief),
        }
    }

    /// Whether this phase has a configured countdown
    pub fn is_timed(self) -> bool {
        Self::TIMED.contains(&self)
    }

    /// Whether a session is in progress (anything but `setup`)
    pub fn is_started(self) -> bool {
        self != Phase::Setup
    }

    /// Stable identifier, identical to the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Reading => "reading",
            Phase::Statement => "self",
            Phase::Discussion => "discussion",
            Phase::Summary => "summary",
            Phase::Debrief => "debrief",
        }
    }

    /// Label shown to the facilitator
    pub fn display_name(self) -> &'static str {
        match self {
            Phase::Setup => "准备",
            Phase::Reading => "看题/阅读",
            Phase::Statement => "个人陈述",
            Phase::Discussion => "自由讨论",
            Phase::Summary => "总结陈述",
            Phase::Debrief => "复盘/结束",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "setup" => Ok(Phase::Setup),
            "reading" | "read" => Ok(Phase::Reading),
            "self" | "statement" => Ok(Phase::Statement),
            "discussion" | "discuss" => Ok(Phase::Discussion),
            "summary" => Ok(Phase::Summary),
            "debrief" => Ok(Phase::Debrief),
            other => Err(DomainError::UnknownPhase(other.to_string())),
        }
    }
}

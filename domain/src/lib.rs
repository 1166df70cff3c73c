//! Domain layer for panel-sim
//!
//! This crate contains the session logic of a group-interview rehearsal:
//! entities, value objects and the phase/timer state machine. It has no
//! dependencies on infrastructure or presentation concerns and never
//! touches a clock or a terminal; callers drive it with one-second ticks.
//!
//! # Core Concepts
//!
//! ## Phases
//!
//! A session moves strictly forward through
//! `setup → reading → self → discussion → summary → debrief`.
//! Only `reset` goes back, and always to `setup`.
//!
//! ## Timer epoch
//!
//! Each phase change or start/pause bumps [`Session::timer_epoch`] so the
//! driver can re-arm its ticker and never double-advance.

pub mod assignment;
pub mod catalog;
pub mod core;
pub mod export;
pub mod phase;
pub mod roster;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use assignment::{Role, RoleMap, SpeakingOrder, order_by_random_keys};
pub use catalog::{CASES, Case, GLOSSARY, GlossaryEntry, ONE_MINUTE_SCRIPT};
pub use core::{
    clock::format_clock,
    error::DomainError,
    string::truncate_chars,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use export::{ParticipantSummary, SessionSnapshot};
pub use phase::{Phase, PhaseDurations, PhaseTimer};
pub use roster::{Participant, ParticipantId, Roster};
pub use scoring::{AverageScore, Criterion, Rating, ScoreSheet};
pub use session::{Session, TickOutcome};

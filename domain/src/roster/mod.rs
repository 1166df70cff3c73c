//! Participant roster.

pub mod entities;

pub use entities::{Participant, ParticipantId, Roster};

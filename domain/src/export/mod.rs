//! Export of the current session state

pub mod snapshot;

pub use snapshot::{ParticipantSummary, SessionSnapshot};

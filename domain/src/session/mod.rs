//! Interview session domain.
//!
//! - [`entities::Session`]: the single owner of all session state and the
//!   phase/timer state machine
//! - [`entities::TickOutcome`]: what one timer tick did

pub mod entities;

pub use entities::{Session, TickOutcome};

//! Session phases and their countdown.
//!
//! - [`value_objects::Phase`]: the six linear stages of a session
//! - [`durations::PhaseDurations`]: configured minutes per timed phase
//! - [`timer::PhaseTimer`]: remaining seconds plus running flag

pub mod durations;
pub mod timer;
pub mod value_objects;

pub use durations::PhaseDurations;
pub use timer::PhaseTimer;
pub use value_objects::Phase;

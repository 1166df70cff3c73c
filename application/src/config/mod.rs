//! Application-level configuration.
//!
//! - [`SessionConfig`]: initial case, roster size, durations and RNG seed

pub mod session_config;

pub use session_config::SessionConfig;

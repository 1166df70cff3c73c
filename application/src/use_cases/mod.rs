//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_session;
pub mod session_command;
pub mod session_controller;

#[cfg(test)]
pub(crate) mod test_support;

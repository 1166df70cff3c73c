//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! implement or consume.

pub mod clipboard;
pub mod ui_event;

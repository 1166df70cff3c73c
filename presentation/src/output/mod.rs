//! Console output for the non-interactive flags

pub mod console;

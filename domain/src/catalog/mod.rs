//! Static, read-only content: discussion cases and reference material.

pub mod case;
pub mod glossary;

pub use case::{CASES, Case};
pub use glossary::{GLOSSARY, GlossaryEntry, ONE_MINUTE_SCRIPT};

//! Scoring: five fixed criteria rated 1–5 per participant.
//!
//! - [`criterion::Criterion`]: the scoring dimensions
//! - [`rating::Rating`]: a clamped 1–5 value
//! - [`sheet::ScoreSheet`]: sparse per-participant ratings and averages

pub mod criterion;
pub mod rating;
pub mod sheet;

pub use criterion::Criterion;
pub use rating::Rating;
pub use sheet::{AverageScore, ScoreSheet};

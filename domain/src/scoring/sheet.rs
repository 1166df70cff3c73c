//! Score sheet

use super::criterion::Criterion;
use super::rating::Rating;
use crate::roster::ParticipantId;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Mean rating of one participant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageScore {
    /// No criterion rated yet
    Unrated,
    /// Mean over rated criteria
    Rated(f64),
}

impl AverageScore {
    /// The mean rounded to one decimal place, `0.0` when unrated
    pub fn rounded(self) -> f64 {
        match self {
            AverageScore::Unrated => 0.0,
            AverageScore::Rated(mean) => (mean * 10.0).round() / 10.0,
        }
    }

    pub fn is_rated(self) -> bool {
        matches!(self, AverageScore::Rated(_))
    }
}

impl std::fmt::Display for AverageScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AverageScore::Unrated => f.write_str("0"),
            AverageScore::Rated(mean) => write!(f, "{:.1}", mean),
        }
    }
}

/// `Rated` serializes as a number with one decimal, `Unrated` as integer `0`.
impl Serialize for AverageScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AverageScore::Unrated => serializer.serialize_u8(0),
            AverageScore::Rated(_) => serializer.serialize_f64(self.rounded()),
        }
    }
}

/// Sparse ratings: participant → criterion → rating.
///
/// Unset criteria are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    cells: BTreeMap<ParticipantId, BTreeMap<Criterion, Rating>>,
}

impl ScoreSheet {
    /// Overwrite a single cell. Other cells are untouched.
    pub fn set(&mut self, participant: ParticipantId, criterion: Criterion, rating: Rating) {
        self.cells
            .entry(participant)
            .or_default()
            .insert(criterion, rating);
    }

    pub fn get(&self, participant: ParticipantId, criterion: Criterion) -> Option<Rating> {
        self.cells
            .get(&participant)
            .and_then(|row| row.get(&criterion))
            .copied()
    }

    /// All ratings of one participant, empty when none are set
    pub fn scores_for(&self, participant: ParticipantId) -> BTreeMap<Criterion, Rating> {
        self.cells.get(&participant).cloned().unwrap_or_default()
    }

    /// Arithmetic mean over the criteria that have a rating.
    pub fn average(&self, participant: ParticipantId) -> AverageScore {
        let Some(row) = self.cells.get(&participant) else {
            return AverageScore::Unrated;
        };
        let values: Vec<u8> = row
            .values()
            .map(|r| r.value())
            .filter(|v| *v > 0)
            .collect();
        if values.is_empty() {
            return AverageScore::Unrated;
        }
        let sum: u32 = values.iter().map(|v| *v as u32).sum();
        AverageScore::Rated(sum as f64 / values.len() as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.values().all(|row| row.is_empty())
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

//! Configured countdown length for each timed phase

use super::value_objects::Phase;
use crate::core::clock::minutes_to_seconds;
use serde::{Deserialize, Serialize};

/// Per-phase durations in whole minutes.
///
/// Every value is kept inside [`PhaseDurations::MIN_MINUTES`]..=
/// [`PhaseDurations::MAX_MINUTES`]; setters saturate instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDurations {
    reading: u32,
    statement: u32,
    discussion: u32,
    summary: u32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            reading: 3,
            statement: 6,
            discussion: 20,
            summary: 4,
        }
    }
}

impl PhaseDurations {
    pub const MIN_MINUTES: u32 = 1;
    pub const MAX_MINUTES: u32 = 60;

    /// Build from raw minute values, clamping each into range.
    pub fn new(reading: u32, statement: u32, discussion: u32, summary: u32) -> Self {
        Self {
            reading: Self::clamp(reading),
            statement: Self::clamp(statement),
            discussion: Self::clamp(discussion),
            summary: Self::clamp(summary),
        }
    }

    fn clamp(minutes: u32) -> u32 {
        minutes.clamp(Self::MIN_MINUTES, Self::MAX_MINUTES)
    }

    fn slot(&self, phase: Phase) -> Option<&u32> {
        match phase {
            Phase::Reading => Some(&self.reading),
            Phase::Statement => Some(&self.statement),
            Phase::Discussion => Some(&self.discussion),
            Phase::Summary => Some(&self.summary),
            Phase::Setup | Phase::Debrief => None,
        }
    }

    fn slot_mut(&mut self, phase: Phase) -> Option<&mut u32> {
        match phase {
            Phase::Reading => Some(&mut self.reading),
            Phase::Statement => Some(&mut self.statement),
            Phase::Discussion => Some(&mut self.discussion),
            Phase::Summary => Some(&mut self.summary),
            Phase::Setup | Phase::Debrief => None,
        }
    }

    /// Configured minutes for `phase`, `None` for untimed phases.
    pub fn minutes(&self, phase: Phase) -> Option<u32> {
        self.slot(phase).copied()
    }

    /// Configured countdown for `phase` in seconds.
    pub fn seconds(&self, phase: Phase) -> Option<u32> {
        self.minutes(phase).map(minutes_to_seconds)
    }

    /// Set the minutes for `phase`, returning the clamped value actually
    /// stored. `None` when the phase is untimed.
    pub fn set_minutes(&mut self, phase: Phase, minutes: i64) -> Option<u32> {
        let slot = self.slot_mut(phase)?;
        let clamped = minutes.clamp(Self::MIN_MINUTES as i64, Self::MAX_MINUTES as i64) as u32;
        *slot = clamped;
        Some(clamped)
    }

    /// Step the minutes for `phase` by `delta`, saturating at the bounds.
    pub fn adjust_minutes(&mut self, phase: Phase, delta: i64) -> Option<u32> {
        let current = self.minutes(phase)? as i64;
        self.set_minutes(phase, current.saturating_add(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let d = PhaseDurations::default();
        assert_eq!(d.minutes(Phase::Reading), Some(3));
        assert_eq!(d.minutes(Phase::Statement), Some(6));
        assert_eq!(d.minutes(Phase::Discussion), Some(20));
        assert_eq!(d.minutes(Phase::Summary), Some(4));
        assert_eq!(d.seconds(Phase::Discussion), Some(1200));
    }

    #[test]
    fn test_untimed_phases_have_no_duration() {
        let mut d = PhaseDurations::default();
        assert_eq!(d.minutes(Phase::Setup), None);
        assert_eq!(d.seconds(Phase::Debrief), None);
        assert_eq!(d.set_minutes(Phase::Debrief, 5), None);
    }

    #[test]
    fn test_set_minutes_clamps() {
        let mut d = PhaseDurations::default();
        assert_eq!(d.set_minutes(Phase::Reading, 0), Some(1));
        assert_eq!(d.set_minutes(Phase::Reading, -4), Some(1));
        assert_eq!(d.set_minutes(Phase::Summary, 61), Some(60));
        assert_eq!(d.minutes(Phase::Summary), Some(60));
    }

    #[test]
    fn test_adjust_minutes_saturates() {
        let mut d = PhaseDurations::new(1, 6, 60, 4);
        assert_eq!(d.adjust_minutes(Phase::Reading, -1), Some(1));
        assert_eq!(d.adjust_minutes(Phase::Discussion, 1), Some(60));
        assert_eq!(d.adjust_minutes(Phase::Statement, 1), Some(7));
    }

    #[test]
    fn test_new_clamps_every_field() {
        let d = PhaseDurations::new(0, 100, 20, 4);
        assert_eq!(d.minutes(Phase::Reading), Some(1));
        assert_eq!(d.minutes(Phase::Statement), Some(60));
    }
}

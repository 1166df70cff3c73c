//! Speaking order with a current-speaker cursor

use super::shuffle::order_by_random_keys;
use crate::roster::{ParticipantId, Roster};
use rand::Rng;

/// A permutation of the roster's ids plus the index of the current speaker.
///
/// Empty until a session starts. When non-empty, `current` always lies in
/// `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeakingOrder {
    ids: Vec<ParticipantId>,
    current: usize,
}

impl SpeakingOrder {
    /// Draw a fresh order for `roster`, cursor on the first speaker.
    pub fn generate<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        Self {
            ids: order_by_random_keys(roster.ids(), rng),
            current: 0,
        }
    }

    pub fn ids(&self) -> &[ParticipantId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_speaker(&self) -> Option<ParticipantId> {
        self.ids.get(self.current).copied()
    }

    /// Move to the next speaker, stopping at the last one.
    pub fn next_speaker(&mut self) -> usize {
        if self.current + 1 < self.ids.len() {
            self.current += 1;
        }
        self.current
    }

    /// Move to the previous speaker, stopping at the first one.
    pub fn previous_speaker(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Resolve ids to names. Ids missing from `roster` resolve to an empty
    /// string so positions are preserved.
    pub fn names(&self, roster: &Roster) -> Vec<String> {
        self.ids
            .iter()
            .map(|id| roster.name_of(*id).unwrap_or_default().to_string())
            .collect()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_is_permutation_for_every_roster_size() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in Roster::MIN_SIZE..=Roster::MAX_SIZE {
            let roster = Roster::numbered(n);
            let order = SpeakingOrder::generate(&roster, &mut rng);
            assert_eq!(order.len(), n);
            let mut ids = order.ids().to_vec();
            ids.sort();
            assert_eq!(ids, roster.ids());
            assert_eq!(order.current_index(), 0);
        }
    }

    #[test]
    fn test_cursor_is_clamped() {
        let roster = Roster::numbered(3);
        let mut order = SpeakingOrder::generate(&roster, &mut StdRng::seed_from_u64(1));
        assert_eq!(order.previous_speaker(), 0);
        assert_eq!(order.next_speaker(), 1);
        assert_eq!(order.next_speaker(), 2);
        assert_eq!(order.next_speaker(), 2);
        assert_eq!(order.current_speaker(), order.ids().last().copied());
    }

    #[test]
    fn test_empty_order_cursor_stays_zero() {
        let mut order = SpeakingOrder::default();
        assert_eq!(order.next_speaker(), 0);
        assert_eq!(order.previous_speaker(), 0);
        assert_eq!(order.current_speaker(), None);
    }

    #[test]
    fn test_names_follow_order() {
        let mut roster = Roster::numbered(3);
        roster.rename(ParticipantId::new(2), "Alice").unwrap();
        let order = SpeakingOrder::generate(&roster, &mut StdRng::seed_from_u64(9));
        let names = order.names(&roster);
        for (id, name) in order.ids().iter().zip(&names) {
            assert_eq!(roster.name_of(*id), Some(name.as_str()));
        }
    }
}

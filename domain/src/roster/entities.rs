//! Roster entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Stable participant identifier, unique within a session (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(u32);

impl ParticipantId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate taking part in the simulation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    /// Participant `n` with the default name `同学n`
    pub fn numbered(n: u32) -> Self {
        Self {
            id: ParticipantId(n),
            name: format!("同学{}", n),
        }
    }
}

/// Ordered list of participants.
///
/// The size always lies within [`Roster::MIN_SIZE`]..=[`Roster::MAX_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::numbered(Self::DEFAULT_SIZE)
    }
}

impl Roster {
    pub const MIN_SIZE: usize = 3;
    pub const MAX_SIZE: usize = 12;
    pub const DEFAULT_SIZE: usize = 6;

    /// `size` participants (clamped) with ids `1..=size` and default names.
    pub fn numbered(size: usize) -> Self {
        let size = Self::clamp_size(size);
        Self {
            participants: (1..=size as u32).map(Participant::numbered).collect(),
        }
    }

    pub fn clamp_size(size: usize) -> usize {
        size.clamp(Self::MIN_SIZE, Self::MAX_SIZE)
    }

    /// Rebuild the roster at a new size.
    ///
    /// Any change regenerates every participant with default names, so
    /// custom names are discarded. Returns `false` (and keeps the current
    /// roster, names included) when the clamped size equals the current one.
    pub fn resize(&mut self, size: usize) -> bool {
        let size = Self::clamp_size(size);
        if size == self.len() {
            return false;
        }
        *self = Self::numbered(size);
        true
    }

    /// Rename a participant. Surrounding whitespace is trimmed.
    pub fn rename(&mut self, id: ParticipantId, name: &str) -> Result<(), DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::UnknownParticipant(id.get()))?;
        participant.name = name.to_string();
        Ok(())
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.get(id).is_some()
    }

    /// Name of a participant, if present
    pub fn name_of(&self, id: ParticipantId) -> Option<&str> {
        self.get(id).map(|p| p.name.as_str())
    }

    pub fn ids(&self) -> Vec<ParticipantId> {
        self.participants.iter().map(|p| p.id).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_defaults() {
        let roster = Roster::numbered(4);
        let names: Vec<&str> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["同学1", "同学2", "同学3", "同学4"]);
        assert_eq!(
            roster.ids(),
            (1..=4).map(ParticipantId::new).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_numbered_clamps_size() {
        assert_eq!(Roster::numbered(0).len(), Roster::MIN_SIZE);
        assert_eq!(Roster::numbered(50).len(), Roster::MAX_SIZE);
        assert_eq!(Roster::default().len(), 6);
    }

    #[test]
    fn test_resize_replaces_custom_names() {
        let mut roster = Roster::numbered(5);
        roster.rename(ParticipantId::new(2), "Alice").unwrap();

        for k in Roster::MIN_SIZE..=Roster::MAX_SIZE {
            if k == roster.len() {
                continue;
            }
            assert!(roster.resize(k));
            assert_eq!(roster.len(), k);
            assert!(roster.iter().all(|p| p.name == format!("同学{}", p.id)));
        }
    }

    #[test]
    fn test_resize_to_same_size_keeps_names() {
        let mut roster = Roster::numbered(3);
        roster.rename(ParticipantId::new(1), "Bob").unwrap();
        // 2 clamps to 3, which is the current size
        assert!(!roster.resize(2));
        assert_eq!(roster.name_of(ParticipantId::new(1)), Some("Bob"));
    }

    #[test]
    fn test_rename_errors() {
        let mut roster = Roster::numbered(3);
        assert_eq!(
            roster.rename(ParticipantId::new(9), "Zed"),
            Err(DomainError::UnknownParticipant(9))
        );
        assert_eq!(
            roster.rename(ParticipantId::new(1), "   "),
            Err(DomainError::EmptyName)
        );
        roster.rename(ParticipantId::new(1), "  Carol ").unwrap();
        assert_eq!(roster.name_of(ParticipantId::new(1)), Some("Carol"));
    }
}

//! Functional roles drawn at random for each session

use super::shuffle::order_by_random_keys;
use crate::roster::Roster;
use rand::Rng;
use serde::{Serialize, Serializer};

/// A functional role in the group discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Leader,
    Timekeeper,
    Scribe,
    DevilsAdvocate,
    /// Fallback for everyone beyond the named roles
    Member,
}

impl Role {
    /// Named roles, handed out in this order to the drawn ranking.
    pub const NAMED: [Role; 4] = [
        Role::Leader,
        Role::Timekeeper,
        Role::Scribe,
        Role::DevilsAdvocate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Leader => "主持/Leader",
            Role::Timekeeper => "计时/Timekeeper",
            Role::Scribe => "记录/Scribe",
            Role::DevilsAdvocate => "质疑/Devil's Advocate",
            Role::Member => "成员",
        }
    }

    /// Role for the participant ranked `rank` (0-based) in a draw
    pub fn for_rank(rank: usize) -> Role {
        Self::NAMED.get(rank).copied().unwrap_or(Role::Member)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Role assignment keyed by participant name.
///
/// Entries keep the draw order for display. Inserting a name that is
/// already present overwrites its role, so duplicate names collapse onto a
/// single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleMap {
    entries: Vec<(String, Role)>,
}

impl RoleMap {
    /// Draw a complete assignment for `roster`.
    pub fn assign<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> Self {
        let ranked = order_by_random_keys(roster.iter(), rng);
        let mut map = Self::default();
        for (rank, participant) in ranked.into_iter().enumerate() {
            map.insert(&participant.name, Role::for_rank(rank));
        }
        map
    }

    fn insert(&mut self, name: &str, role: Role) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = role,
            None => self.entries.push((name.to_string(), role)),
        }
    }

    /// Role assigned to `name`, if any
    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, role)| *role)
    }

    /// Role assigned to `name`, falling back to [`Role::Member`]
    pub fn role_or_member(&self, name: &str) -> Role {
        self.role_of(name).unwrap_or(Role::Member)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Role)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), *r))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::ParticipantId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_named_roles_go_to_distinct_participants() {
        let mut rng = StdRng::seed_from_u64(11);
        for n in Roster::MIN_SIZE..=Roster::MAX_SIZE {
            let roster = Roster::numbered(n);
            let roles = RoleMap::assign(&roster, &mut rng);
            assert_eq!(roles.len(), n);

            for named in Role::NAMED.iter().take(n) {
                assert_eq!(roles.iter().filter(|(_, r)| r == named).count(), 1);
            }
            let members = roles.iter().filter(|(_, r)| *r == Role::Member).count();
            assert_eq!(members, n.saturating_sub(Role::NAMED.len()));
        }
    }

    #[test]
    fn test_three_participants_leave_devils_advocate_unassigned() {
        let roster = Roster::numbered(3);
        let roles = RoleMap::assign(&roster, &mut StdRng::seed_from_u64(5));
        assert!(roles.iter().all(|(_, r)| r != Role::DevilsAdvocate));
        assert!(roles.iter().all(|(_, r)| r != Role::Member));
    }

    #[test]
    fn test_reassign_replaces_whole_map() {
        let mut roster = Roster::numbered(6);
        let first = RoleMap::assign(&roster, &mut StdRng::seed_from_u64(1));
        roster.rename(ParticipantId::new(1), "Alice").unwrap();
        let second = RoleMap::assign(&roster, &mut StdRng::seed_from_u64(2));
        assert!(first.role_of("同学1").is_some());
        assert!(second.role_of("同学1").is_none());
        assert!(second.role_of("Alice").is_some());
        assert_eq!(second.len(), 6);
    }

    #[test]
    fn test_duplicate_names_collapse() {
        let mut roster = Roster::numbered(4);
        roster.rename(ParticipantId::new(1), "Sam").unwrap();
        roster.rename(ParticipantId::new(2), "Sam").unwrap();
        let roles = RoleMap::assign(&roster, &mut StdRng::seed_from_u64(8));
        assert_eq!(roles.len(), 3);
    }

    #[test]
    fn test_fallback_for_unknown_name() {
        let roles = RoleMap::default();
        assert_eq!(roles.role_of("nobody"), None);
        assert_eq!(roles.role_or_member("nobody"), Role::Member);
    }

    #[test]
    fn test_fallback_label_is_plain_chinese() {
        assert_eq!(Role::Member.label(), "成员");
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"成员\"");
    }

    #[test]
    fn test_role_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&Role::DevilsAdvocate).unwrap(),
            "\"质疑/Devil's Advocate\""
        );
    }
}

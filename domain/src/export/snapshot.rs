//! Read-only session snapshot for the clipboard export

use crate::assignment::Role;
use crate::phase::Phase;
use crate::scoring::{AverageScore, Criterion, Rating};
use crate::session::Session;
use serde::Serialize;
use std::collections::BTreeMap;

/// One participant's line in the export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantSummary {
    pub name: String,
    pub role: Role,
    pub avg: AverageScore,
    pub scores: BTreeMap<Criterion, Rating>,
}

/// Everything a facilitator wants to keep after a rehearsal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    /// Title of the selected case
    pub case: String,
    pub phase: Phase,
    pub participants: Vec<ParticipantSummary>,
    pub notes: String,
    /// Speaking order resolved to names
    pub speaking_order: Vec<String>,
}

impl SessionSnapshot {
    pub(crate) fn capture(session: &Session) -> Self {
        let participants = session
            .roster()
            .iter()
            .map(|p| ParticipantSummary {
                name: p.name.clone(),
                role: session.roles().role_or_member(&p.name),
                avg: session.scores().average(p.id),
                scores: session.scores().scores_for(p.id),
            })
            .collect();

        Self {
            case: session.case().title.to_string(),
            phase: session.phase(),
            participants,
            notes: session.notes().to_string(),
            speaking_order: session.speaking_order().names(session.roster()),
        }
    }

    /// Pretty-printed JSON, two-space indented.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Case;
    use crate::phase::PhaseDurations;
    use crate::roster::ParticipantId;
    use crate::scoring::Criterion;
    use crate::session::Session;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::Value;

    #[test]
    fn test_snapshot_before_start() {
        let session = Session::new(Case::default_case(), 3, PhaseDurations::default());
        let snapshot = session.snapshot();
        assert_eq!(snapshot.case, Case::default_case().title);
        assert_eq!(snapshot.participants.len(), 3);
        assert!(snapshot.speaking_order.is_empty());
        assert!(snapshot.participants.iter().all(|p| !p.avg.is_rated()));
    }

    #[test]
    fn test_json_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = Session::new(Case::default_case(), 4, PhaseDurations::default());
        session.rename(ParticipantId::new(2), "Alice").unwrap();
        session.start(&mut rng).unwrap();
        session.rate(ParticipantId::new(2), Criterion::Logic, 4).unwrap();
        session.rate(ParticipantId::new(2), Criterion::Data, 2).unwrap();
        session.set_notes("清晰");

        let json = session.snapshot().to_pretty_json().unwrap();
        assert!(json.contains("\n  \"case\""));
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["phase"], "reading");
        assert_eq!(value["notes"], "清晰");
        assert_eq!(value["speakingOrder"].as_array().unwrap().len(), 4);

        let alice = &value["participants"][1];
        assert_eq!(alice["name"], "Alice");
        assert_eq!(alice["avg"], 3.0);
        assert!(alice["avg"].is_number());
        assert_eq!(alice["scores"]["逻辑"], 4);
        assert_eq!(alice["scores"]["数据"], 2);
        assert!(alice["role"].as_str().unwrap().contains('/'));

        let unrated = &value["participants"][0];
        assert_eq!(unrated["avg"], 0);
        assert!(unrated["scores"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_role_falls_back_to_member_without_assignment() {
        let session = Session::new(Case::default_case(), 3, PhaseDurations::default());
        let value = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(value["participants"][0]["role"], "成员");
    }
}

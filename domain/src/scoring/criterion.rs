//! Scoring criteria

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One fixed scoring dimension.
///
/// Serialized with the short Chinese labels the score sheet is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Criterion {
    /// Logical structure
    #[serde(rename = "逻辑")]
    Logic,
    /// Sensitivity to data
    #[serde(rename = "数据")]
    Data,
    /// Collaboration and pushing things forward
    #[serde(rename = "协作")]
    Collaboration,
    /// Guiding the group
    #[serde(rename = "引导")]
    Facilitation,
    /// Business judgment
    #[serde(rename = "商业")]
    Business,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Logic,
        Criterion::Data,
        Criterion::Collaboration,
        Criterion::Facilitation,
        Criterion::Business,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Logic => "逻辑",
            Criterion::Data => "数据",
            Criterion::Collaboration => "协作",
            Criterion::Facilitation => "引导",
            Criterion::Business => "商业",
        }
    }

    /// Longer description used in the scoring legend
    pub fn description(self) -> &'static str {
        match self {
            Criterion::Logic => "逻辑结构",
            Criterion::Data => "数据敏感度",
            Criterion::Collaboration => "协作推进",
            Criterion::Facilitation => "引导能力",
            Criterion::Business => "商业判断",
        }
    }

    /// Position in [`Criterion::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Criterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "逻辑" | "logic" => Ok(Criterion::Logic),
            "数据" | "data" => Ok(Criterion::Data),
            "协作" | "collab" | "collaboration" => Ok(Criterion::Collaboration),
            "引导" | "guide" | "facilitation" => Ok(Criterion::Facilitation),
            "商业" | "business" => Ok(Criterion::Business),
            other => Err(DomainError::UnknownCriterion(other.to_string())),
        }
    }
}

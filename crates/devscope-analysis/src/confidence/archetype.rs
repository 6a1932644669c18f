//! Primary technology → developer archetype guess, used to pick a baseline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of archetypes with community baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeveloperArchetype {
    #[serde(rename = "AI/ML Developer")]
    AiMl,
    #[serde(rename = "Frontend Developer")]
    Frontend,
    #[serde(rename = "Backend Developer")]
    Backend,
    #[serde(rename = "DevOps/Infrastructure")]
    DevOps,
    #[serde(rename = "Data Engineer")]
    DataEngineer,
}

impl DeveloperArchetype {
    /// Label used as the baseline lookup key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML Developer",
            Self::Frontend => "Frontend Developer",
            Self::Backend => "Backend Developer",
            Self::DevOps => "DevOps/Infrastructure",
            Self::DataEngineer => "Data Engineer",
        }
    }
}

impl fmt::Display for DeveloperArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring table, scanned in order. Order matters: "javascript" must be
/// tested before "java", and the one-letter "r" and "c" entries catch
/// anything containing that letter that nothing earlier claimed.
const ARCHETYPE_TABLE: &[(&str, DeveloperArchetype)] = &[
    ("python", DeveloperArchetype::AiMl),
    ("javascript", DeveloperArchetype::Frontend),
    ("typescript", DeveloperArchetype::Frontend),
    ("java", DeveloperArchetype::Backend),
    ("go", DeveloperArchetype::DevOps),
    ("rust", DeveloperArchetype::DevOps),
    ("scala", DeveloperArchetype::DataEngineer),
    ("r", DeveloperArchetype::DataEngineer),
    ("c++", DeveloperArchetype::Backend),
    ("c", DeveloperArchetype::Backend),
];

/// Guess an archetype from a primary technology label.
///
/// Case-insensitive substring match, first table entry wins. Missing or
/// unrecognized labels default to [`DeveloperArchetype::Backend`].
pub fn developer_archetype(primary_category: Option<&str>) -> DeveloperArchetype {
    let Some(label) = primary_category.filter(|l| !l.is_empty()) else {
        return DeveloperArchetype::Backend;
    };
    let lower = label.to_lowercase();
    ARCHETYPE_TABLE
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map(|(_, archetype)| *archetype)
        .unwrap_or(DeveloperArchetype::Backend)
}

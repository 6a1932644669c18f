use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative band of a match score, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchLevel {
    /// score ≥ 0.8
    #[serde(rename = "very high match")]
    VeryHigh,
    /// 0.6 ≤ score < 0.8
    #[serde(rename = "high match")]
    High,
    /// 0.4 ≤ score < 0.6
    #[serde(rename = "medium match")]
    Medium,
    /// 0.2 ≤ score < 0.4
    #[serde(rename = "low fit")]
    Low,
    /// score < 0.2
    #[serde(rename = "no match")]
    None,
}

impl MatchLevel {
    /// Classify a score. Each band includes its lower bound.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::VeryHigh
        } else if score >= 0.6 {
            Self::High
        } else if score >= 0.4 {
            Self::Medium
        } else if score >= 0.2 {
            Self::Low
        } else {
            Self::None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryHigh => "very high match",
            Self::High => "high match",
            Self::Medium => "medium match",
            Self::Low => "low fit",
            Self::None => "no match",
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weighted compatibility of a developer with one target category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: f64,
    pub level: MatchLevel,
    pub tendency_contribution: f64,
    pub activity_contribution: f64,
    pub rationale: String,
}

//! Cold-start planning: decide whether to blend and fetch the baselines.

use serde::{Deserialize, Serialize};

use devscope_core::models::{CommunityBaseline, ConfidenceWeight, TimeBaselineParams};
use devscope_core::traits::BaselineProvider;

use super::archetype::{developer_archetype, DeveloperArchetype};
use super::weighter::ConfidenceWeighter;

/// Community activity level used to pick time baseline parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Active,
    Medium,
    Sporadic,
}

impl ActivityLevel {
    /// More than three projects counts as active, anything less as sporadic.
    pub fn from_project_count(project_count: i64) -> Self {
        if project_count > 3 {
            Self::Active
        } else {
            Self::Sporadic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Medium => "medium",
            Self::Sporadic => "sporadic",
        }
    }
}

/// What a caller needs to run a cold-start-aware inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColdStartPlan {
    pub is_cold_start: bool,
    pub confidence_weight: ConfidenceWeight,
    pub archetype: Option<DeveloperArchetype>,
    pub community_tendency: Option<CommunityBaseline>,
    pub community_time_params: Option<TimeBaselineParams>,
}

impl ColdStartPlan {
    /// Plan for a developer with enough history: full trust, no baselines.
    pub fn sufficient() -> Self {
        Self {
            is_cold_start: false,
            confidence_weight: ConfidenceWeight::FULL,
            archetype: None,
            community_tendency: None,
            community_time_params: None,
        }
    }
}

/// Build a [`ColdStartPlan`]. The provider is consulted only on cold start.
pub fn prepare_cold_start(
    weighter: &ConfidenceWeighter,
    project_count: i64,
    primary_category: Option<&str>,
    provider: &dyn BaselineProvider,
) -> ColdStartPlan {
    if !weighter.is_cold_start(project_count) {
        return ColdStartPlan::sufficient();
    }

    let archetype = developer_archetype(primary_category);
    let level = ActivityLevel::from_project_count(project_count);
    tracing::debug!(
        project_count,
        archetype = %archetype,
        level = level.as_str(),
        "cold start selected"
    );

    ColdStartPlan {
        is_cold_start: true,
        confidence_weight: weighter.weight(project_count),
        archetype: Some(archetype),
        community_tendency: Some(provider.community_tendency(archetype.as_str())),
        community_time_params: Some(provider.time_params(level.as_str())),
    }
}

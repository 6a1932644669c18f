use serde::{Deserialize, Serialize};

use devscope_core::models::{
    ConfidenceWeight, TendencyDistribution, TimeBaselineParams, TimeFitResult,
};

use crate::confidence::DeveloperArchetype;

/// Raw historical signals for one developer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeveloperSignals {
    pub project_count: i64,
    pub primary_category: Option<String>,
    /// One label per observed project, duplicates included.
    pub categories: Vec<String>,
    /// ISO-8601 activity timestamps, any order.
    pub event_timestamps: Vec<String>,
}

/// One row of [`DeveloperAnalysis::ranked`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: String,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperAnalysis {
    pub is_cold_start: bool,
    pub confidence_weight: ConfidenceWeight,
    pub archetype: DeveloperArchetype,
    pub tendency: TendencyDistribution,
    /// Categories by descending probability.
    pub ranked: Vec<RankedCategory>,
    /// `None` on cold start or when there are no timestamps.
    pub activity: Option<TimeFitResult>,
    /// Community time parameters, present only on cold start.
    pub community_time_params: Option<TimeBaselineParams>,
    pub cold_start_note: String,
}

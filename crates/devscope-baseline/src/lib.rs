//! # devscope-baseline
//!
//! Read-only community baselines: per-archetype category distributions and
//! per-activity-level Weibull parameters. Tables are `'static` slices,
//! so lookups need no synchronization.

pub mod tables;

use devscope_core::models::{CommunityBaseline, TimeBaselineParams};
use devscope_core::traits::BaselineProvider;

pub use tables::{ACTIVITY_LEVELS, ARCHETYPE_TENDENCIES, DEFAULT_TENDENCY};

/// Activity level used when the requested one is unknown.
pub const DEFAULT_ACTIVITY_LEVEL: &str = "medium";

/// [`BaselineProvider`] backed by the compiled-in tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticBaselineProvider;

impl StaticBaselineProvider {
    pub fn new() -> Self {
        Self
    }
}

impl BaselineProvider for StaticBaselineProvider {
    fn community_tendency(&self, archetype: &str) -> CommunityBaseline {
        let table = ARCHETYPE_TENDENCIES
            .iter()
            .find(|(name, _)| *name == archetype)
            .map(|(_, table)| *table)
            .unwrap_or(DEFAULT_TENDENCY);
        CommunityBaseline::from_pairs(table.iter().copied())
    }

    fn time_params(&self, activity_level: &str) -> TimeBaselineParams {
        lookup_time_params(activity_level)
            .or_else(|| lookup_time_params(DEFAULT_ACTIVITY_LEVEL))
            .unwrap_or(tables::MEDIUM_PARAMS)
    }
}

fn lookup_time_params(level: &str) -> Option<TimeBaselineParams> {
    ACTIVITY_LEVELS
        .iter()
        .find(|(name, _)| *name == level)
        .map(|(_, params)| *params)
}

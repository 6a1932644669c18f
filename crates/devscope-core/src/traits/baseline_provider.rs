//! BaselineProvider: the seam to community seed data.
//!
//! The analysis crate only consults a provider when the caller has
//! selected cold-start blending. `devscope-baseline` ships the static
//! tables; hosts may plug in their own.

use crate::models::{CommunityBaseline, TimeBaselineParams};

/// Read-only source of community baselines.
pub trait BaselineProvider: Send + Sync {
    /// Category distribution for a developer archetype label
    /// (e.g. "AI/ML Developer"). Unknown labels get a generic default.
    fn community_tendency(&self, archetype: &str) -> CommunityBaseline;

    /// Weibull parameters for an activity level label
    /// ("active", "medium", "sporadic"). Unknown labels get "medium".
    fn time_params(&self, activity_level: &str) -> TimeBaselineParams;
}

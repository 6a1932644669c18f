//! Confidence weighting: how much to trust a developer's own history.
//!
//! Two independent thresholds: one where the weight reaches 1.0 (default
//! 10) and a smaller one below which cold-start blending is triggered
//! (default 5).

pub mod archetype;
pub mod cold_start;
pub mod weighter;

pub use archetype::{developer_archetype, DeveloperArchetype};
pub use cold_start::{prepare_cold_start, ActivityLevel, ColdStartPlan};
pub use weighter::{confidence_weight, is_cold_start, ConfidenceWeighter};

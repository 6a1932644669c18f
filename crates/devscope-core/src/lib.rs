//! # devscope-core
//!
//! Foundation crate for the devscope inference engine.
//! Defines the result types, errors, config, traits, and constants
//! shared by the analysis and baseline crates.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod numeric;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::DevscopeConfig;
pub use errors::{ConfigError, DevscopeErrorCode, FitError, TimestampError};
pub use models::{
    CommunityBaseline, ConfidenceWeight, DistributionKind, MatchLevel, MatchResult,
    TendencyDistribution, TendencyEntry, TimeBaselineParams, TimeFitResult,
};
pub use traits::BaselineProvider;

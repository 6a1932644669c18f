//! Value types exchanged between the inference components.
//!
//! Field names (camelCase on the wire) are the serialization contract for
//! any calling layer.

pub mod baseline;
pub mod match_result;
pub mod tendency;
pub mod time_fit;
pub mod weight;

pub use baseline::{CommunityBaseline, TimeBaselineParams};
pub use match_result::{MatchLevel, MatchResult};
pub use tendency::{TendencyDistribution, TendencyEntry};
pub use time_fit::{DistributionKind, TimeFitResult};
pub use weight::ConfidenceWeight;

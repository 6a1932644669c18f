//! # devscope-analysis
//!
//! Stateless inference over a developer's historical signals:
//!
//! - [`confidence`]: trust weight and cold-start policy
//! - [`tendency`]: Laplace-smoothed category probabilities, baseline blending
//! - [`activity`]: inter-event Weibull fit with fallbacks
//! - [`scoring`]: weighted match score against a target category
//! - [`profile`]: the four chained for one developer
//!
//! Every operation is a pure function of its inputs and is safe to call
//! concurrently.

pub mod activity;
pub mod confidence;
pub mod profile;
pub mod scoring;
pub mod tendency;

pub use activity::ActivityFitter;
pub use confidence::{ColdStartPlan, ConfidenceWeighter, DeveloperArchetype};
pub use profile::{DeveloperAnalysis, DeveloperAnalyzer, DeveloperSignals};
pub use scoring::MatchScorer;
pub use tendency::TendencyEstimator;

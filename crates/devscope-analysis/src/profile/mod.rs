//! Profile pipeline: the four components chained for one developer.

pub mod analyzer;
pub mod types;

pub use analyzer::DeveloperAnalyzer;
pub use types::{DeveloperAnalysis, DeveloperSignals, RankedCategory};

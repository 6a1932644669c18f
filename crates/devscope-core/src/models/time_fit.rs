use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which branch of the activity fitter produced a [`TimeFitResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionKind {
    Weibull,
    ExponentialFallback,
    SimpleMeanFallback,
    InsufficientData,
    InsufficientIntervals,
    Error,
}

impl DistributionKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weibull => "Weibull",
            Self::ExponentialFallback => "Exponential (Fallback)",
            Self::SimpleMeanFallback => "Simple Mean (Fallback)",
            Self::InsufficientData => "Insufficient Data",
            Self::InsufficientIntervals => "Insufficient Intervals",
            Self::Error => "Error",
        }
    }

    /// True when a parametric model was actually fitted.
    pub fn is_fitted(&self) -> bool {
        matches!(self, Self::Weibull | Self::ExponentialFallback)
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of fitting an inter-event time distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFitResult {
    pub distribution_kind: DistributionKind,
    /// Fitted parameters, e.g. `shape` and `scale`. Empty when nothing was fitted.
    pub parameters: BTreeMap<String, f64>,
    pub expected_interval_days: f64,
    #[serde(rename = "nextActiveProbability30d")]
    pub next_active_probability_30d: f64,
    /// Post-filter intervals in days, rounded to 2 decimals.
    pub intervals: Vec<f64>,
    pub rationale: String,
}

impl TimeFitResult {
    /// A result with every numeric field at zero.
    pub fn empty(kind: DistributionKind, rationale: impl Into<String>) -> Self {
        Self {
            distribution_kind: kind,
            parameters: BTreeMap::new(),
            expected_interval_days: 0.0,
            next_active_probability_30d: 0.0,
            intervals: Vec::new(),
            rationale: rationale.into(),
        }
    }
}

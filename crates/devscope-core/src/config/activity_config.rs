//! Activity (inter-event time) fitting configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActivityConfig {
    /// Gaps at or below this many days are dropped as noise. Default: 0.01.
    pub min_interval_days: Option<f64>,
    /// Usable intervals required before fitting. Default: 3.
    pub min_intervals: Option<usize>,
    /// Reactivation horizon in days. Default: 30.
    pub horizon_days: Option<f64>,
    /// Probability reported when no model is fitted. Default: 0.5.
    pub neutral_probability: Option<f64>,
    /// Newton iteration cap for the Weibull shape. Default: 100.
    pub max_iterations: Option<usize>,
    /// Relative convergence tolerance for the Weibull shape. Default: 1e-10.
    pub tolerance: Option<f64>,
    /// Try an exponential model when the Weibull fit fails. Default: true.
    pub exponential_fallback: Option<bool>,
}

impl ActivityConfig {
    pub fn effective_min_interval_days(&self) -> f64 {
        self.min_interval_days
            .unwrap_or(constants::DEFAULT_MIN_INTERVAL_DAYS)
    }

    pub fn effective_min_intervals(&self) -> usize {
        self.min_intervals.unwrap_or(constants::DEFAULT_MIN_INTERVALS)
    }

    pub fn effective_horizon_days(&self) -> f64 {
        self.horizon_days.unwrap_or(constants::DEFAULT_HORIZON_DAYS)
    }

    pub fn effective_neutral_probability(&self) -> f64 {
        self.neutral_probability
            .unwrap_or(constants::NEUTRAL_PROBABILITY)
    }

    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or(constants::DEFAULT_MAX_ITERATIONS)
    }

    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(constants::DEFAULT_TOLERANCE)
    }

    pub fn effective_exponential_fallback(&self) -> bool {
        self.exponential_fallback.unwrap_or(true)
    }
}

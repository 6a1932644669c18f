//! Match scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Weights are not renormalized. Keep them summing to 1.0 if the score
/// should stay within [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of the tendency probability. Default: 0.7.
    pub tendency_weight: Option<f64>,
    /// Weight of the 30-day activity probability. Default: 0.3.
    pub activity_weight: Option<f64>,
}

impl ScoringConfig {
    pub fn effective_tendency_weight(&self) -> f64 {
        self.tendency_weight
            .unwrap_or(constants::DEFAULT_TENDENCY_WEIGHT)
    }

    pub fn effective_activity_weight(&self) -> f64 {
        self.activity_weight
            .unwrap_or(constants::DEFAULT_ACTIVITY_WEIGHT)
    }
}

//! Tendency estimation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TendencyConfig {
    /// Laplace smoothing pseudo-count. 0 gives the raw MLE. Default: 1.0.
    pub alpha: Option<f64>,
}

impl TendencyConfig {
    /// Returns the effective alpha, defaulting to 1.0.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(constants::DEFAULT_ALPHA)
    }
}

//! Confidence weighting and cold-start configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// The two thresholds are independent on purpose: a developer can be past
/// cold start and still have less than full confidence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Observations needed for a weight of 1.0. Default: 10.
    pub threshold: Option<u32>,
    /// Observations below which cold-start blending applies. Default: 5.
    pub cold_start_threshold: Option<u32>,
}

impl ConfidenceConfig {
    /// Returns the effective confidence threshold, defaulting to 10.
    pub fn effective_threshold(&self) -> u32 {
        self.threshold
            .unwrap_or(constants::DEFAULT_CONFIDENCE_THRESHOLD)
    }

    /// Returns the effective cold-start threshold, defaulting to 5.
    pub fn effective_cold_start_threshold(&self) -> u32 {
        self.cold_start_threshold
            .unwrap_or(constants::DEFAULT_COLD_START_THRESHOLD)
    }
}

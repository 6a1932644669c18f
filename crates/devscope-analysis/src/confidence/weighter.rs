use devscope_core::config::ConfidenceConfig;
use devscope_core::constants::{self, WEIGHT_DECIMALS};
use devscope_core::models::ConfidenceWeight;
use devscope_core::numeric::round_to;

/// Trust weight for `observation_count` observations.
///
/// `min(1.0, count / threshold)` rounded to 3 decimals. Negative counts are
/// malformed upstream input and clamp to 0.0. A zero threshold trusts any
/// positive count fully.
pub fn confidence_weight(observation_count: i64, threshold: u32) -> ConfidenceWeight {
    if observation_count <= 0 {
        return ConfidenceWeight::NONE;
    }
    if threshold == 0 {
        return ConfidenceWeight::FULL;
    }
    let ratio = (observation_count as f64 / f64::from(threshold)).min(1.0);
    ConfidenceWeight::new(round_to(ratio, WEIGHT_DECIMALS))
}

/// True iff `observation_count < threshold`.
pub fn is_cold_start(observation_count: i64, threshold: u32) -> bool {
    observation_count < i64::from(threshold)
}

/// Holds both thresholds so callers can't accidentally reuse one for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceWeighter {
    confidence_threshold: u32,
    cold_start_threshold: u32,
}

impl ConfidenceWeighter {
    pub fn new(confidence_threshold: u32, cold_start_threshold: u32) -> Self {
        Self {
            confidence_threshold,
            cold_start_threshold,
        }
    }

    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self::new(
            config.effective_threshold(),
            config.effective_cold_start_threshold(),
        )
    }

    pub fn confidence_threshold(&self) -> u32 {
        self.confidence_threshold
    }

    pub fn cold_start_threshold(&self) -> u32 {
        self.cold_start_threshold
    }

    pub fn weight(&self, observation_count: i64) -> ConfidenceWeight {
        confidence_weight(observation_count, self.confidence_threshold)
    }

    pub fn is_cold_start(&self, observation_count: i64) -> bool {
        is_cold_start(observation_count, self.cold_start_threshold)
    }
}

impl Default for ConfidenceWeighter {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_CONFIDENCE_THRESHOLD,
            constants::DEFAULT_COLD_START_THRESHOLD,
        )
    }
}

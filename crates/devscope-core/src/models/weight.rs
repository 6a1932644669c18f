use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust placed in a developer's own history, clamped to [0.0, 1.0].
///
/// 1.0 means the observed data is used as-is; anything lower blends in a
/// community baseline.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfidenceWeight(f64);

impl ConfidenceWeight {
    /// Full trust; no blending.
    pub const FULL: Self = Self(1.0);
    /// No trust; pure baseline.
    pub const NONE: Self = Self(0.0);

    /// Create a new weight, clamping to [0.0, 1.0]. NaN maps to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::NONE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the weight is exactly 1.0.
    pub fn is_full(self) -> bool {
        self.0 >= 1.0
    }
}

impl Default for ConfidenceWeight {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for ConfidenceWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for ConfidenceWeight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<ConfidenceWeight> for f64 {
    fn from(w: ConfidenceWeight) -> Self {
        w.0
    }
}

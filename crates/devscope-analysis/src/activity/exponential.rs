//! Exponential inter-event model, used when the Weibull fit fails.

use statrs::distribution::{ContinuousCDF, Exp};

use devscope_core::errors::FitError;
use devscope_core::numeric::mean;

/// Exponential fit parameterized by its scale (mean), `λ = 1/rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit {
    pub scale: f64,
}

impl ExponentialFit {
    pub fn mean(&self) -> f64 {
        self.scale
    }

    /// `1 − e^(−t/λ)`.
    pub fn cdf(&self, t: f64) -> Result<f64, FitError> {
        let dist =
            Exp::new(1.0 / self.scale).map_err(|e| FitError::InvalidParameters(e.to_string()))?;
        Ok(dist.cdf(t))
    }
}

/// MLE of the scale is the sample mean.
pub fn fit(samples: &[f64]) -> Result<ExponentialFit, FitError> {
    if samples.is_empty() {
        return Err(FitError::Degenerate("no samples".to_string()));
    }
    let scale = mean(samples);
    if !scale.is_finite() || scale <= 0.0 {
        return Err(FitError::InvalidParameters(format!(
            "scale must be finite and positive, got {scale}"
        )));
    }
    Ok(ExponentialFit { scale })
}

//! Two-parameter Weibull maximum likelihood (location fixed at 0).
//!
//! The scale has a closed form given the shape, `λ = (Σ x^k / n)^(1/k)`, so
//! only the profile equation for `k` needs a numeric solve:
//!
//! ```text
//! g(k) = Σ x^k ln x / Σ x^k − 1/k − mean(ln x) = 0
//! ```
//!
//! `g` is strictly increasing whenever the sample is not constant, so the
//! root is unique. We use Newton's method inside a shrinking bracket and
//! bisect whenever a Newton step would leave it.

use statrs::distribution::{ContinuousCDF, Weibull};
use statrs::function::gamma::gamma;

use devscope_core::config::ActivityConfig;
use devscope_core::constants;
use devscope_core::errors::FitError;

/// Variance of `ln x` below which the sample is treated as constant.
const MIN_LOG_VARIANCE: f64 = 1e-20;

/// Newton solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    pub max_iterations: usize,
    /// Relative step size at which the shape is considered converged.
    pub tolerance: f64,
}

impl SolverOptions {
    pub fn from_config(config: &ActivityConfig) -> Self {
        Self {
            max_iterations: config.effective_max_iterations(),
            tolerance: config.effective_tolerance(),
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            tolerance: constants::DEFAULT_TOLERANCE,
        }
    }
}

/// Fitted Weibull parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeibullFit {
    pub shape: f64,
    pub scale: f64,
    /// Newton iterations used.
    pub iterations: usize,
}

impl WeibullFit {
    /// `λ·Γ(1 + 1/k)`.
    pub fn mean(&self) -> f64 {
        self.scale * gamma(1.0 + 1.0 / self.shape)
    }

    /// `P(T ≤ t)`.
    pub fn cdf(&self, t: f64) -> Result<f64, FitError> {
        let dist = Weibull::new(self.shape, self.scale)
            .map_err(|e| FitError::InvalidParameters(e.to_string()))?;
        Ok(dist.cdf(t))
    }
}

/// Per-shape sums over the max-normalized sample.
struct ShapeSums {
    s0: f64,
    s1: f64,
    s2: f64,
}

fn shape_sums(log_y: &[f64], k: f64) -> ShapeSums {
    let mut sums = ShapeSums {
        s0: 0.0,
        s1: 0.0,
        s2: 0.0,
    };
    for &ly in log_y {
        let w = (k * ly).exp();
        sums.s0 += w;
        sums.s1 += w * ly;
        sums.s2 += w * ly * ly;
    }
    sums
}

/// Fit a Weibull distribution to strictly positive `samples`.
pub fn fit(samples: &[f64], options: &SolverOptions) -> Result<WeibullFit, FitError> {
    if samples.len() < 2 {
        return Err(FitError::Degenerate(format!(
            "need at least 2 samples, got {}",
            samples.len()
        )));
    }
    if samples.iter().any(|&x| !x.is_finite() || x <= 0.0) {
        return Err(FitError::InvalidParameters(
            "samples must be finite and strictly positive".to_string(),
        ));
    }

    // Normalizing by the max keeps y^k in (0, 1] for any shape. g(k) is
    // unchanged because it is invariant to rescaling the sample.
    let max = samples.iter().copied().fold(f64::MIN, f64::max);
    let log_y: Vec<f64> = samples.iter().map(|&x| (x / max).ln()).collect();
    let n = log_y.len() as f64;
    let mean_log = log_y.iter().sum::<f64>() / n;
    let var_log = log_y.iter().map(|ly| (ly - mean_log).powi(2)).sum::<f64>() / n;
    if !(var_log > MIN_LOG_VARIANCE) {
        return Err(FitError::Degenerate("all samples are identical".to_string()));
    }

    // Moment estimate for a Gumbel-distributed ln x.
    let mut k = std::f64::consts::PI / (6.0 * var_log).sqrt();
    let mut lo = 0.0_f64;
    let mut hi = f64::INFINITY;

    for iteration in 1..=options.max_iterations {
        let sums = shape_sums(&log_y, k);
        let ratio = sums.s1 / sums.s0;
        let g = ratio - 1.0 / k - mean_log;
        let dg = sums.s2 / sums.s0 - ratio * ratio + 1.0 / (k * k);
        if !g.is_finite() || !dg.is_finite() || dg <= 0.0 {
            return Err(FitError::NotConverged {
                iterations: iteration,
                last_shape: k,
            });
        }

        if g < 0.0 {
            lo = k;
        } else {
            hi = k;
        }

        let mut next = k - g / dg;
        if !next.is_finite() || next <= lo || next >= hi {
            next = if hi.is_finite() { 0.5 * (lo + hi) } else { 2.0 * k };
        }

        let converged = g == 0.0 || (next - k).abs() <= options.tolerance * k;
        k = next;
        if converged {
            let scale = max * (shape_sums(&log_y, k).s0 / n).powf(1.0 / k);
            if !scale.is_finite() || scale <= 0.0 || !k.is_finite() {
                return Err(FitError::InvalidParameters(format!(
                    "non-finite estimate (shape {k}, scale {scale})"
                )));
            }
            return Ok(WeibullFit {
                shape: k,
                scale,
                iterations: iteration,
            });
        }
    }

    Err(FitError::NotConverged {
        iterations: options.max_iterations,
        last_shape: k,
    })
}

/// Log-likelihood of `samples` under Weibull(`shape`, `scale`).
pub fn log_likelihood(samples: &[f64], shape: f64, scale: f64) -> f64 {
    let n = samples.len() as f64;
    let sum_log: f64 = samples.iter().map(|x| x.ln()).sum();
    let sum_pow: f64 = samples.iter().map(|x| (x / scale).powf(shape)).sum();
    n * shape.ln() - n * shape * scale.ln() + (shape - 1.0) * sum_log - sum_pow
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic Weibull quantiles at the midpoints of n equal bins.
    fn quantile_sample(shape: f64, scale: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let u = (i as f64 + 0.5) / n as f64;
                scale * (-(1.0 - u).ln()).powf(1.0 / shape)
            })
            .collect()
    }

    #[test]
    fn test_recovers_parameters_from_quantiles() {
        let sample = quantile_sample(1.5, 10.0, 200);
        let fit = fit(&sample, &SolverOptions::default()).unwrap();
        assert!((fit.shape - 1.5).abs() < 0.1, "shape {}", fit.shape);
        assert!((fit.scale - 10.0).abs() < 0.5, "scale {}", fit.scale);
    }

    #[test]
    fn test_exponential_sample_has_shape_near_one() {
        let sample = quantile_sample(1.0, 4.0, 300);
        let fit = fit(&sample, &SolverOptions::default()).unwrap();
        assert!((fit.shape - 1.0).abs() < 0.1, "shape {}", fit.shape);
    }

    #[test]
    fn test_estimate_is_a_likelihood_maximum() {
        let sample = vec![0.5, 1.2, 2.0, 3.1, 7.5, 9.0, 14.2];
        let fit = fit(&sample, &SolverOptions::default()).unwrap();
        let best = log_likelihood(&sample, fit.shape, fit.scale);
        for (dk, dl) in [(0.05, 0.0), (-0.05, 0.0), (0.0, 0.2), (0.0, -0.2)] {
            let other = log_likelihood(&sample, fit.shape + dk, fit.scale + dl);
            assert!(other < best, "({dk}, {dl}) beat the MLE: {other} >= {best}");
        }
    }

    #[test]
    fn test_scale_invariance() {
        let sample = vec![1.0, 2.0, 4.0, 5.0, 11.0];
        let scaled: Vec<f64> = sample.iter().map(|x| x * 1000.0).collect();
        let a = fit(&sample, &SolverOptions::default()).unwrap();
        let b = fit(&scaled, &SolverOptions::default()).unwrap();
        assert!((a.shape - b.shape).abs() < 1e-8);
        assert!((a.scale * 1000.0 - b.scale).abs() < 1e-5);
    }

    #[test]
    fn test_constant_sample_is_degenerate() {
        let err = fit(&[2.0, 2.0, 2.0, 2.0], &SolverOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::Degenerate(_)));
    }

    #[test]
    fn test_rejects_non_positive_samples() {
        let err = fit(&[1.0, 0.0, 3.0], &SolverOptions::default()).unwrap_err();
        assert!(matches!(err, FitError::InvalidParameters(_)));
    }

    #[test]
    fn test_iteration_cap_reports_non_convergence() {
        let options = SolverOptions {
            max_iterations: 1,
            tolerance: 1e-300,
        };
        let err = fit(&[0.5, 1.2, 2.0, 3.1, 7.5], &options).unwrap_err();
        assert!(matches!(err, FitError::NotConverged { iterations: 1, .. }));
    }

    #[test]
    fn test_mean_and_cdf_for_unit_exponential() {
        let fit = WeibullFit {
            shape: 1.0,
            scale: 2.0,
            iterations: 0,
        };
        assert!((fit.mean() - 2.0).abs() < 1e-9);
        let p = fit.cdf(2.0).unwrap();
        assert!((p - (1.0 - (-1.0f64).exp())).abs() < 1e-12);
    }
}

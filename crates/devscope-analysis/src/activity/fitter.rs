//! ActivityFitter: timestamps → inter-event distribution → 30-day activity.

use std::collections::BTreeMap;

use devscope_core::config::ActivityConfig;
use devscope_core::constants::{INTERVAL_DECIMALS, PARAMETER_DECIMALS, PROBABILITY_DECIMALS};
use devscope_core::errors::{DevscopeErrorCode, FitError};
use devscope_core::models::{DistributionKind, TimeFitResult};
use devscope_core::numeric::{mean, round_to};

use super::exponential;
use super::intervals::{filter_noise, inter_event_days};
use super::timestamps::parse_all;
use super::weibull::{self, SolverOptions};

/// Fits inter-event time distributions with a Weibull → exponential →
/// simple-mean fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFitter {
    min_interval_days: f64,
    min_intervals: usize,
    horizon_days: f64,
    neutral_probability: f64,
    solver: SolverOptions,
    exponential_fallback: bool,
}

impl ActivityFitter {
    pub fn from_config(config: &ActivityConfig) -> Self {
        Self {
            min_interval_days: config.effective_min_interval_days(),
            min_intervals: config.effective_min_intervals(),
            horizon_days: config.effective_horizon_days(),
            neutral_probability: config.effective_neutral_probability().clamp(0.0, 1.0),
            solver: SolverOptions::from_config(config),
            exponential_fallback: config.effective_exponential_fallback(),
        }
    }

    /// Enable or disable the exponential model between Weibull and the mean.
    pub fn with_exponential_fallback(mut self, enabled: bool) -> Self {
        self.exponential_fallback = enabled;
        self
    }

    pub fn horizon_days(&self) -> f64 {
        self.horizon_days
    }

    /// Probability reported when no model could be fitted.
    pub fn neutral_probability(&self) -> f64 {
        self.neutral_probability
    }

    /// Fit the activity distribution of a batch of ISO-8601 timestamps.
    ///
    /// Order does not matter. Gaps at or below the noise floor are dropped
    /// before fitting.
    pub fn fit<S: AsRef<str>>(&self, timestamps: &[S]) -> TimeFitResult {
        let span = devscope_core::fit_span!(timestamps.len());
        let _guard = span.enter();

        if timestamps.len() < 2 {
            return TimeFitResult::empty(
                DistributionKind::InsufficientData,
                "insufficient data to fit an activity distribution",
            );
        }

        let times = match parse_all(timestamps) {
            Ok(times) => times,
            Err(err) => {
                tracing::warn!(
                    code = err.error_code(),
                    index = err.index,
                    input = %err.input,
                    "timestamp parse failed"
                );
                return TimeFitResult::empty(
                    DistributionKind::Error,
                    format!("timestamp parse error: {err}"),
                );
            }
        };

        let intervals = filter_noise(inter_event_days(times), self.min_interval_days);
        self.fit_intervals(&intervals)
    }

    /// Fit already-filtered inter-event gaps in days.
    pub fn fit_intervals(&self, intervals: &[f64]) -> TimeFitResult {
        if intervals.len() < self.min_intervals {
            return TimeFitResult {
                distribution_kind: DistributionKind::InsufficientIntervals,
                parameters: BTreeMap::new(),
                expected_interval_days: round_to(mean(intervals), INTERVAL_DECIMALS),
                next_active_probability_30d: self.neutral_probability,
                intervals: rounded_intervals(intervals),
                rationale: format!(
                    "only {} usable interval(s); at least {} needed for a reliable fit",
                    intervals.len(),
                    self.min_intervals
                ),
            };
        }

        let result = self.resolve(
            self.weibull(intervals),
            || self.exponential(intervals),
            intervals,
        );

        tracing::debug!(
            kind = result.distribution_kind.label(),
            intervals = intervals.len(),
            expected_days = result.expected_interval_days,
            probability = result.next_active_probability_30d,
            "activity fitted"
        );
        result
    }

    /// Walk the fallback chain: the Weibull result if it succeeded, else the
    /// exponential one (when enabled), else the simple mean.
    fn resolve<F>(
        &self,
        weibull: Result<TimeFitResult, FitError>,
        exponential: F,
        intervals: &[f64],
    ) -> TimeFitResult
    where
        F: FnOnce() -> Result<TimeFitResult, FitError>,
    {
        let err = match weibull {
            Ok(result) => return result,
            Err(err) => err,
        };
        tracing::warn!(code = err.error_code(), error = %err, "weibull fit failed");

        if self.exponential_fallback {
            match exponential() {
                Ok(result) => return result,
                Err(err) => {
                    tracing::warn!(code = err.error_code(), error = %err, "exponential fit failed")
                }
            }
        }
        self.simple_mean(intervals)
    }

    fn weibull(&self, intervals: &[f64]) -> Result<TimeFitResult, FitError> {
        let fit = weibull::fit(intervals, &self.solver)?;
        let expected = finite(fit.mean(), "expected interval")?;
        let probability = finite(fit.cdf(self.horizon_days)?, "activity probability")?;

        let mut parameters = BTreeMap::new();
        parameters.insert("shape".to_string(), round_to(fit.shape, PARAMETER_DECIMALS));
        parameters.insert("scale".to_string(), round_to(fit.scale, PARAMETER_DECIMALS));

        Ok(TimeFitResult {
            distribution_kind: DistributionKind::Weibull,
            parameters,
            expected_interval_days: round_to(expected, INTERVAL_DECIMALS),
            next_active_probability_30d: round_probability(probability),
            intervals: rounded_intervals(intervals),
            rationale: format!(
                "Weibull fit (k={:.2}); next activity expected within {:.1} days",
                fit.shape, expected
            ),
        })
    }

    fn exponential(&self, intervals: &[f64]) -> Result<TimeFitResult, FitError> {
        let fit = exponential::fit(intervals)?;
        let probability = finite(fit.cdf(self.horizon_days)?, "activity probability")?;

        let mut parameters = BTreeMap::new();
        parameters.insert("scale".to_string(), round_to(fit.scale, PARAMETER_DECIMALS));

        Ok(TimeFitResult {
            distribution_kind: DistributionKind::ExponentialFallback,
            parameters,
            expected_interval_days: round_to(fit.mean(), INTERVAL_DECIMALS),
            next_active_probability_30d: round_probability(probability),
            intervals: rounded_intervals(intervals),
            rationale: format!(
                "Weibull fit failed, fell back to exponential; mean interval {:.1} days",
                fit.mean()
            ),
        })
    }

    fn simple_mean(&self, intervals: &[f64]) -> TimeFitResult {
        let mean = mean(intervals);
        TimeFitResult {
            distribution_kind: DistributionKind::SimpleMeanFallback,
            parameters: BTreeMap::new(),
            expected_interval_days: round_to(mean, INTERVAL_DECIMALS),
            next_active_probability_30d: self.neutral_probability,
            intervals: rounded_intervals(intervals),
            rationale: format!("fit failed, using simple mean interval of {mean:.1} days"),
        }
    }
}

impl Default for ActivityFitter {
    fn default() -> Self {
        Self::from_config(&ActivityConfig::default())
    }
}

fn finite(value: f64, what: &str) -> Result<f64, FitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FitError::InvalidParameters(format!("{what} is not finite")))
    }
}

fn round_probability(p: f64) -> f64 {
    round_to(p.clamp(0.0, 1.0), PROBABILITY_DECIMALS)
}

fn rounded_intervals(intervals: &[f64]) -> Vec<f64> {
    intervals
        .iter()
        .map(|&d| round_to(d, INTERVAL_DECIMALS))
        .collect()
}

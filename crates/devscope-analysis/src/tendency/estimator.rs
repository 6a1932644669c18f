//! TendencyEstimator: observations (+ optional baseline) → distribution.

use devscope_core::config::TendencyConfig;
use devscope_core::constants::{self, PROBABILITY_DECIMALS, SUFFICIENT_HISTORY_WEIGHT};
use devscope_core::models::{
    CommunityBaseline, ConfidenceWeight, TendencyDistribution, TendencyEntry,
};
use devscope_core::numeric::round_to;

use super::blend::blend;
use super::laplace::{smoothed_probabilities, tally};

/// Laplace-smoothed tendency estimator with cold-start blending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TendencyEstimator {
    alpha: f64,
}

impl TendencyEstimator {
    /// Negative or non-finite `alpha` is clamped to 0.0 (raw MLE).
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: sanitize_alpha(alpha),
        }
    }

    pub fn from_config(config: &TendencyConfig) -> Self {
        Self::new(config.effective_alpha())
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Estimate the tendency distribution for `observations`.
    ///
    /// - No observations: the baseline verbatim if one is given, else empty.
    /// - Baseline given and `weight < 1.0`: blend over the union of keys.
    /// - Otherwise: the smoothed distribution alone.
    ///
    /// Computed probabilities are rounded to 4 decimals.
    pub fn estimate<S: AsRef<str>>(
        &self,
        observations: &[S],
        baseline: Option<&CommunityBaseline>,
        weight: ConfidenceWeight,
    ) -> TendencyDistribution {
        if observations.is_empty() {
            return match baseline {
                Some(baseline) => baseline_only(baseline),
                None => TendencyDistribution::new(),
            };
        }

        let tally = tally(observations);
        let smoothed = smoothed_probabilities(&tally, self.alpha);

        let blending = baseline.filter(|_| !weight.is_full());
        let (probabilities, blended) = match blending {
            Some(baseline) => (blend(&smoothed, baseline.as_map(), weight.value()), true),
            None => (smoothed, false),
        };

        tracing::debug!(
            observations = tally.total(),
            categories = tally.distinct(),
            alpha = self.alpha,
            weight = weight.value(),
            blended,
            "tendency estimated"
        );

        probabilities
            .into_iter()
            .map(|(category, p)| {
                let observed_count = tally.count(&category);
                let rationale = if blended && weight.value() <= SUFFICIENT_HISTORY_WEIGHT {
                    blended_rationale(p)
                } else {
                    history_rationale(observed_count, p)
                };
                let entry = TendencyEntry {
                    probability: round_to(p, PROBABILITY_DECIMALS),
                    observed_count,
                    rationale,
                };
                (category, entry)
            })
            .collect()
    }
}

impl Default for TendencyEstimator {
    fn default() -> Self {
        Self::new(constants::DEFAULT_ALPHA)
    }
}

fn sanitize_alpha(alpha: f64) -> f64 {
    if alpha.is_finite() && alpha >= 0.0 {
        alpha
    } else {
        tracing::warn!(alpha, "invalid smoothing alpha, clamping to 0.0");
        0.0
    }
}

fn baseline_only(baseline: &CommunityBaseline) -> TendencyDistribution {
    baseline
        .iter()
        .map(|(category, p)| {
            let entry = TendencyEntry {
                probability: p,
                observed_count: 0,
                rationale: format!(
                    "no history; inferred from community baseline at {}",
                    percent(p)
                ),
            };
            (category.to_string(), entry)
        })
        .collect()
}

fn history_rationale(observed_count: u64, p: f64) -> String {
    format!(
        "based on {observed_count} historical observation(s), participation probability is {}",
        percent(p)
    )
}

fn blended_rationale(p: f64) -> String {
    format!(
        "sparse history; blended with community baseline to {}",
        percent(p)
    )
}

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

use devscope_core::config::ScoringConfig;
use devscope_core::constants::{self, PROBABILITY_DECIMALS};
use devscope_core::models::{MatchLevel, MatchResult, TendencyDistribution};
use devscope_core::numeric::round_to;

/// Weighted linear match score. Weights are used as given, never
/// renormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScorer {
    tendency_weight: f64,
    activity_weight: f64,
}

impl MatchScorer {
    pub fn new(tendency_weight: f64, activity_weight: f64) -> Self {
        Self {
            tendency_weight,
            activity_weight,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            config.effective_tendency_weight(),
            config.effective_activity_weight(),
        )
    }

    pub fn tendency_weight(&self) -> f64 {
        self.tendency_weight
    }

    pub fn activity_weight(&self) -> f64 {
        self.activity_weight
    }

    /// Score `target` against a tendency distribution and a 30-day activity
    /// probability.
    ///
    /// The target is matched case-insensitively; the first key in iteration
    /// order wins. An unknown target contributes 0.0.
    pub fn score(
        &self,
        tendency: &TendencyDistribution,
        target: &str,
        activity_probability: f64,
    ) -> MatchResult {
        let matched = tendency.find_ignore_case(target);
        let probability = matched.map(|(_, entry)| entry.probability).unwrap_or(0.0);

        let tendency_part = probability * self.tendency_weight;
        let activity_part = activity_probability * self.activity_weight;
        let score = round_to(tendency_part + activity_part, PROBABILITY_DECIMALS);
        let level = MatchLevel::from_score(score);

        let mut rationale = format!(
            "overall score {score:.2} ({level}); tendency contribution {tendency_part:.2}, \
             activity contribution {activity_part:.2}"
        );
        if matched.is_none() {
            rationale.push_str(&format!(
                "; note: no historical signal found for {target}"
            ));
        }

        tracing::debug!(target, score, level = level.name(), "match scored");

        MatchResult {
            score,
            level,
            tendency_contribution: round_to(tendency_part, PROBABILITY_DECIMALS),
            activity_contribution: round_to(activity_part, PROBABILITY_DECIMALS),
            rationale,
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(
            constants::DEFAULT_TENDENCY_WEIGHT,
            constants::DEFAULT_ACTIVITY_WEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devscope_core::models::TendencyEntry;

    fn tendency(pairs: &[(&str, f64)]) -> TendencyDistribution {
        pairs
            .iter()
            .map(|&(category, probability)| {
                let entry = TendencyEntry {
                    probability,
                    observed_count: 1,
                    rationale: String::new(),
                };
                (category.to_string(), entry)
            })
            .collect()
    }

    #[test]
    fn test_known_target_is_very_high() {
        let t = tendency(&[("Python", 0.8), ("Go", 0.2)]);
        let result = MatchScorer::default().score(&t, "Python", 0.9);
        assert_eq!(result.score, 0.83);
        assert_eq!(result.level, MatchLevel::VeryHigh);
        assert_eq!(result.tendency_contribution, 0.56);
        assert_eq!(result.activity_contribution, 0.27);
        assert!(!result.rationale.contains("no historical signal"));
    }

    #[test]
    fn test_unknown_target_is_low_fit_with_note() {
        let t = tendency(&[("Python", 0.8)]);
        let result = MatchScorer::default().score(&t, "Rust", 0.9);
        assert_eq!(result.score, 0.27);
        assert_eq!(result.level, MatchLevel::Low);
        assert_eq!(result.tendency_contribution, 0.0);
        assert!(result.rationale.contains("no historical signal found for Rust"));
    }

    #[test]
    fn test_match_ignores_case() {
        let t = tendency(&[("TypeScript", 0.5)]);
        let result = MatchScorer::default().score(&t, "typescript", 0.0);
        assert_eq!(result.score, 0.35);
        assert_eq!(result.level, MatchLevel::Low);
    }

    #[test]
    fn test_weights_are_not_renormalized() {
        let t = tendency(&[("Go", 1.0)]);
        let result = MatchScorer::new(1.0, 1.0).score(&t, "Go", 1.0);
        assert_eq!(result.score, 2.0);
        assert_eq!(result.level, MatchLevel::VeryHigh);
    }
}

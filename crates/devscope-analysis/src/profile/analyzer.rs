//! DeveloperAnalyzer: signals → cold-start plan → tendency → activity.

use std::collections::BTreeMap;

use rayon::prelude::*;

use devscope_core::config::DevscopeConfig;
use devscope_core::models::MatchResult;
use devscope_core::traits::BaselineProvider;

use crate::activity::ActivityFitter;
use crate::confidence::{developer_archetype, prepare_cold_start, ConfidenceWeighter};
use crate::scoring::MatchScorer;
use crate::tendency::{most_common_category, TendencyEstimator};

use super::types::{DeveloperAnalysis, DeveloperSignals, RankedCategory};

/// Runs the full inference for a developer. Holds configuration only, so
/// one analyzer can serve any number of threads.
#[derive(Debug, Clone)]
pub struct DeveloperAnalyzer<P> {
    weighter: ConfidenceWeighter,
    estimator: TendencyEstimator,
    fitter: ActivityFitter,
    scorer: MatchScorer,
    provider: P,
}

impl<P: BaselineProvider> DeveloperAnalyzer<P> {
    pub fn new(config: &DevscopeConfig, provider: P) -> Self {
        Self {
            weighter: ConfidenceWeighter::from_config(&config.confidence),
            estimator: TendencyEstimator::from_config(&config.tendency),
            fitter: ActivityFitter::from_config(&config.activity),
            scorer: MatchScorer::from_config(&config.scoring),
            provider,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn analyze(&self, signals: &DeveloperSignals) -> DeveloperAnalysis {
        let span = devscope_core::analyze_span!(
            signals.project_count,
            signals.event_timestamps.len()
        );
        let _guard = span.enter();

        let primary = signals
            .primary_category
            .clone()
            .or_else(|| most_common_category(&signals.categories));
        let plan = prepare_cold_start(
            &self.weighter,
            signals.project_count,
            primary.as_deref(),
            &self.provider,
        );
        let weight = self.weighter.weight(signals.project_count);

        let fallback: Vec<String> = primary.iter().cloned().collect();
        let observations = if signals.categories.is_empty() {
            &fallback
        } else {
            &signals.categories
        };
        let tendency =
            self.estimator
                .estimate(observations, plan.community_tendency.as_ref(), weight);

        let ranked = tendency
            .ranked()
            .into_iter()
            .map(|(category, entry)| RankedCategory {
                category: category.to_string(),
                probability: entry.probability,
            })
            .collect();

        let activity = (!plan.is_cold_start && !signals.event_timestamps.is_empty())
            .then(|| self.fitter.fit(&signals.event_timestamps));

        let cold_start_note = if plan.is_cold_start {
            format!(
                "only {} project(s); blended with community baseline at confidence {:.1}%",
                signals.project_count.max(0),
                weight.value() * 100.0
            )
        } else {
            "sufficient history; using the developer's own data".to_string()
        };

        tracing::info!(
            cold_start = plan.is_cold_start,
            weight = weight.value(),
            categories = tendency.len(),
            activity = activity.as_ref().map(|a| a.distribution_kind.label()),
            "developer analyzed"
        );

        DeveloperAnalysis {
            is_cold_start: plan.is_cold_start,
            confidence_weight: weight,
            archetype: plan
                .archetype
                .unwrap_or_else(|| developer_archetype(primary.as_deref())),
            tendency,
            ranked,
            activity,
            community_time_params: plan.community_time_params,
            cold_start_note,
        }
    }

    /// Score each target against an analysis.
    ///
    /// The activity probability is the fit's 30-day probability whenever
    /// an activity fit ran, whatever its kind (so an `InsufficientData` fit
    /// contributes 0.0). Without a fit (cold start or no timestamps) it is
    /// the neutral probability.
    pub fn match_targets<S: AsRef<str>>(
        &self,
        analysis: &DeveloperAnalysis,
        targets: &[S],
    ) -> BTreeMap<String, MatchResult> {
        let span = devscope_core::match_span!(targets.len());
        let _guard = span.enter();

        let activity_probability = self.activity_probability(analysis);
        targets
            .iter()
            .map(|target| {
                let target = target.as_ref();
                let result = self
                    .scorer
                    .score(&analysis.tendency, target, activity_probability);
                (target.to_string(), result)
            })
            .collect()
    }

    /// Analyze many developers in parallel. Output order matches input.
    pub fn analyze_batch(&self, signals: &[DeveloperSignals]) -> Vec<DeveloperAnalysis> {
        signals.par_iter().map(|s| self.analyze(s)).collect()
    }

    fn activity_probability(&self, analysis: &DeveloperAnalysis) -> f64 {
        match &analysis.activity {
            Some(fit) => fit.next_active_probability_30d,
            None => self.fitter.neutral_probability(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devscope_core::models::{CommunityBaseline, DistributionKind, TimeBaselineParams};

    struct FixedProvider;

    impl BaselineProvider for FixedProvider {
        fn community_tendency(&self, _archetype: &str) -> CommunityBaseline {
            CommunityBaseline::from_pairs([("Python", 0.6), ("Go", 0.4)])
        }

        fn time_params(&self, _activity_level: &str) -> TimeBaselineParams {
            TimeBaselineParams {
                shape: 1.0,
                scale: 10.0,
                prob_30d: 0.7,
            }
        }
    }

    fn analyzer() -> DeveloperAnalyzer<FixedProvider> {
        DeveloperAnalyzer::new(&DevscopeConfig::default(), FixedProvider)
    }

    #[test]
    fn test_empty_categories_fall_back_to_primary() {
        let signals = DeveloperSignals {
            project_count: 12,
            primary_category: Some("Rust".to_string()),
            ..Default::default()
        };
        let analysis = analyzer().analyze(&signals);
        assert!(!analysis.is_cold_start);
        assert_eq!(analysis.tendency.get("Rust").unwrap().probability, 1.0);
        assert!(analysis.activity.is_none());
    }

    #[test]
    fn test_cold_start_ignores_community_time_probability() {
        let signals = DeveloperSignals {
            project_count: 1,
            categories: vec!["Python".to_string()],
            ..Default::default()
        };
        let a = analyzer();
        let analysis = a.analyze(&signals);
        assert!(analysis.is_cold_start);
        let scores = a.match_targets(&analysis, &["Go"]);
        // Go: 0.1*0 + 0.9*0.4 = 0.36 tendency; activity is neutral, not 0.7.
        assert!(analysis.community_time_params.is_some());
        assert_eq!(scores["Go"].tendency_contribution, 0.252);
        assert_eq!(scores["Go"].activity_contribution, 0.15);
    }

    #[test]
    fn test_insufficient_data_fit_contributes_zero() {
        let signals = DeveloperSignals {
            project_count: 12,
            categories: vec!["Go".to_string()],
            event_timestamps: vec!["2024-01-01T00:00:00Z".to_string()],
            ..Default::default()
        };
        let a = analyzer();
        let analysis = a.analyze(&signals);
        let fit = analysis.activity.as_ref().unwrap();
        assert_eq!(fit.distribution_kind, DistributionKind::InsufficientData);
        let scores = a.match_targets(&analysis, &["Go"]);
        assert_eq!(scores["Go"].activity_contribution, 0.0);
        assert_eq!(scores["Go"].score, 0.7);
    }

    #[test]
    fn test_parse_error_fit_contributes_zero() {
        let signals = DeveloperSignals {
            project_count: 12,
            categories: vec!["Go".to_string()],
            event_timestamps: vec!["2024-01-01".to_string(), "soon".to_string()],
            ..Default::default()
        };
        let a = analyzer();
        let analysis = a.analyze(&signals);
        assert_eq!(
            analysis.activity.as_ref().unwrap().distribution_kind,
            DistributionKind::Error
        );
        let scores = a.match_targets(&analysis, &["Go"]);
        assert_eq!(scores["Go"].activity_contribution, 0.0);
    }

    #[test]
    fn test_insufficient_intervals_fit_uses_its_probability() {
        let signals = DeveloperSignals {
            project_count: 12,
            categories: vec!["Go".to_string()],
            event_timestamps: vec!["2024-01-01".to_string(), "2024-01-05".to_string()],
            ..Default::default()
        };
        let a = analyzer();
        let analysis = a.analyze(&signals);
        let fit = analysis.activity.as_ref().unwrap();
        assert_eq!(fit.distribution_kind, DistributionKind::InsufficientIntervals);
        let scores = a.match_targets(&analysis, &["Go"]);
        assert_eq!(scores["Go"].activity_contribution, 0.15);
    }

    #[test]
    fn test_no_fit_and_no_baseline_is_neutral() {
        let signals = DeveloperSignals {
            project_count: 10,
            categories: vec!["Go".to_string()],
            ..Default::default()
        };
        let a = analyzer();
        let analysis = a.analyze(&signals);
        let scores = a.match_targets(&analysis, &["Go"]);
        assert_eq!(scores["Go"].activity_contribution, 0.15);
    }
}

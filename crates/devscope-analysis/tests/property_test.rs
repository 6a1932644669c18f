use devscope_analysis::confidence::confidence_weight;
use devscope_analysis::tendency::blend;
use devscope_analysis::{ActivityFitter, MatchScorer, TendencyEstimator};
use devscope_core::{CommunityBaseline, ConfidenceWeight};
use proptest::prelude::*;

fn arb_labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("Rust".to_string()),
            Just("Go".to_string()),
            Just("Python".to_string()),
            Just("C".to_string()),
            "[a-z]{1,6}",
        ],
        1..40,
    )
}

fn arb_gaps() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.02f64..120.0, 3..30)
}

// ── Smoothed distributions are normalized ────────────────────────────────

proptest! {
    #[test]
    fn smoothed_probabilities_sum_to_one(labels in arb_labels(), alpha in 0.0f64..5.0) {
        let dist = TendencyEstimator::new(alpha).estimate(&labels, None, ConfidenceWeight::FULL);
        let total = dist.total_probability();
        // Each entry is rounded to 4 decimals.
        let slack = 5e-5 * dist.len() as f64 + 1e-9;
        prop_assert!((total - 1.0).abs() <= slack, "total {}", total);
    }
}

// ── Weight is monotone and bounded ───────────────────────────────────────

proptest! {
    #[test]
    fn weight_is_monotone(count in -50i64..200, threshold in 0u32..50) {
        let here = confidence_weight(count, threshold).value();
        let next = confidence_weight(count + 1, threshold).value();
        prop_assert!(next >= here);
        prop_assert!((0.0..=1.0).contains(&here));
        if threshold > 0 && count >= threshold as i64 {
            prop_assert_eq!(here, 1.0);
        }
    }
}

// ── Blend moves towards the user as weight grows ─────────────────────────

proptest! {
    #[test]
    fn blend_is_monotone_in_weight(
        user_p in 0.0f64..=1.0,
        community_p in 0.0f64..=1.0,
        w1 in 0.0f64..=1.0,
        w2 in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if w1 <= w2 { (w1, w2) } else { (w2, w1) };
        let user = [("x".to_string(), user_p)].into_iter().collect();
        let community = [("x".to_string(), community_p)].into_iter().collect();
        let at_lo = blend(&user, &community, lo)["x"];
        let at_hi = blend(&user, &community, hi)["x"];
        if user_p >= community_p {
            prop_assert!(at_hi >= at_lo - 1e-12);
        } else {
            prop_assert!(at_hi <= at_lo + 1e-12);
        }
        prop_assert!((0.0..=1.0 + 1e-12).contains(&at_lo));
    }
}

proptest! {
    #[test]
    fn blended_entries_stay_in_unit_interval(labels in arb_labels(), w in 0.0f64..1.0) {
        let baseline = CommunityBaseline::from_pairs([("Python", 0.5), ("Go", 0.3), ("Rust", 0.2)]);
        let dist = TendencyEstimator::default().estimate(&labels, Some(&baseline), ConfidenceWeight::new(w));
        for (_, entry) in dist.iter() {
            prop_assert!((0.0..=1.0).contains(&entry.probability));
        }
        for category in baseline.categories() {
            prop_assert!(dist.get(category).is_some());
        }
    }
}

// ── Activity probability is always a probability ─────────────────────────

proptest! {
    #[test]
    fn activity_probability_is_bounded(gaps in arb_gaps()) {
        let result = ActivityFitter::default().fit_intervals(&gaps);
        prop_assert!((0.0..=1.0).contains(&result.next_active_probability_30d));
        prop_assert!(result.expected_interval_days >= 0.0);
        prop_assert_eq!(result.intervals.len(), gaps.len());
    }

    #[test]
    fn activity_fit_is_idempotent(gaps in arb_gaps()) {
        let fitter = ActivityFitter::default();
        prop_assert_eq!(fitter.fit_intervals(&gaps), fitter.fit_intervals(&gaps));
    }
}

// ── Score is bounded by the weights ──────────────────────────────────────

proptest! {
    #[test]
    fn score_is_bounded(labels in arb_labels(), target in "[A-Za-z]{1,6}", activity in 0.0f64..=1.0) {
        let dist = TendencyEstimator::default().estimate(&labels, None, ConfidenceWeight::FULL);
        let result = MatchScorer::default().score(&dist, &target, activity);
        prop_assert!((0.0..=1.0).contains(&result.score));
    }
}

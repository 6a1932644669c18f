use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Population-average category distribution for one developer archetype.
///
/// Read-only input to the tendency estimator. Probabilities sum to ~1.0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommunityBaseline {
    probabilities: BTreeMap<String, f64>,
}

impl CommunityBaseline {
    pub fn new(probabilities: BTreeMap<String, f64>) -> Self {
        Self { probabilities }
    }

    /// Build from `(category, probability)` pairs. Later duplicates win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            probabilities: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.probabilities.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.probabilities.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.probabilities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.probabilities
    }
}

/// Community Weibull parameters for an activity level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBaselineParams {
    pub shape: f64,
    pub scale: f64,
    #[serde(rename = "prob30d")]
    pub prob_30d: f64,
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One category's estimated participation probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TendencyEntry {
    pub probability: f64,
    pub observed_count: u64,
    pub rationale: String,
}

/// Category → [`TendencyEntry`], iterated in lexicographic key order.
///
/// Unblended distributions sum to 1.0. Blended ones are a convex
/// combination over the union of keys and are not renormalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TendencyDistribution {
    entries: BTreeMap<String, TendencyEntry>,
}

impl TendencyDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: impl Into<String>, entry: TendencyEntry) {
        self.entries.insert(category.into(), entry);
    }

    pub fn get(&self, category: &str) -> Option<&TendencyEntry> {
        self.entries.get(category)
    }

    /// Case-insensitive exact lookup. The first key in iteration order wins
    /// when several keys differ only by case.
    pub fn find_ignore_case(&self, category: &str) -> Option<(&str, &TendencyEntry)> {
        let needle = category.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| key.to_lowercase() == needle)
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TendencyEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of probabilities over all entries.
    pub fn total_probability(&self) -> f64 {
        self.entries.values().map(|e| e.probability).sum()
    }

    /// Plain category → probability view.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.probability))
            .collect()
    }

    /// Entries by descending probability; ties keep key order.
    pub fn ranked(&self) -> Vec<(&str, &TendencyEntry)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.probability.total_cmp(&a.1.probability));
        ranked
    }
}

impl FromIterator<(String, TendencyEntry)> for TendencyDistribution {
    fn from_iter<I: IntoIterator<Item = (String, TendencyEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

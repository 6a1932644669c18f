use std::collections::BTreeMap;

/// Per-category frequency counts plus the order categories first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: BTreeMap<String, u64>,
    first_seen: Vec<String>,
    total: u64,
}

impl CategoryTally {
    pub fn count(&self, category: &str) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Total observations (N).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Distinct categories (K).
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Count occurrences of each label.
pub fn tally<S: AsRef<str>>(observations: &[S]) -> CategoryTally {
    let mut tally = CategoryTally::default();
    for label in observations {
        let label = label.as_ref();
        match tally.counts.get_mut(label) {
            Some(count) => *count += 1,
            None => {
                tally.counts.insert(label.to_string(), 1);
                tally.first_seen.push(label.to_string());
            }
        }
        tally.total += 1;
    }
    tally
}

/// Laplace-smoothed probabilities over the observed categories (unrounded).
///
/// Empty for an empty tally. With `alpha == 0` this is the raw MLE.
pub fn smoothed_probabilities(tally: &CategoryTally, alpha: f64) -> BTreeMap<String, f64> {
    let denominator = tally.total as f64 + alpha * tally.distinct() as f64;
    if tally.is_empty() || denominator <= 0.0 {
        return BTreeMap::new();
    }
    tally
        .counts
        .iter()
        .map(|(category, &count)| (category.clone(), (count as f64 + alpha) / denominator))
        .collect()
}

/// The most frequent label. Ties go to the label seen first.
pub fn most_common_category<S: AsRef<str>>(observations: &[S]) -> Option<String> {
    let tally = tally(observations);
    let mut best: Option<(&String, u64)> = None;
    for category in &tally.first_seen {
        let count = tally.count(category);
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category.clone())
}

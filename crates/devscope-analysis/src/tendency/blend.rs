use std::collections::{BTreeMap, BTreeSet};

/// Convex blend of two category distributions over the union of their keys.
///
/// `w·user + (1 − w)·community`, a missing key counting as 0 on its side.
/// The result is not renormalized. When the key sets differ the sum can be
/// below 1.0.
pub fn blend(
    user: &BTreeMap<String, f64>,
    community: &BTreeMap<String, f64>,
    weight: f64,
) -> BTreeMap<String, f64> {
    let keys: BTreeSet<&String> = user.keys().chain(community.keys()).collect();
    keys.into_iter()
        .map(|key| {
            let u = user.get(key).copied().unwrap_or(0.0);
            let c = community.get(key).copied().unwrap_or(0.0);
            (key.clone(), weight * u + (1.0 - weight) * c)
        })
        .collect()
}

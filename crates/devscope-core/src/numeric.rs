//! Small numeric helpers shared across crates.

/// Round `value` to `places` decimal places. Exact ties go to the even
/// digit (0.15625 → 0.1562), the same as Python's `round`.
///
/// Non-finite input is returned unchanged.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round_ties_even() / factor;
    // Avoid emitting -0.0 on the wire.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

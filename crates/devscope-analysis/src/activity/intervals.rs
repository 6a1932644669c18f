//! Inter-arrival gaps.

use chrono::{DateTime, Utc};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Sort `times` ascending and return consecutive gaps in fractional days.
pub fn inter_event_days(mut times: Vec<DateTime<Utc>>) -> Vec<f64> {
    times.sort_unstable();
    times
        .windows(2)
        .map(|pair| {
            let delta = pair[1] - pair[0];
            match delta.num_microseconds() {
                Some(us) => us as f64 / MICROS_PER_DAY,
                None => delta.num_milliseconds() as f64 / MILLIS_PER_DAY,
            }
        })
        .collect()
}

/// Drop gaps at or below `min_days` (near-simultaneous events such as
/// several commits in one push).
pub fn filter_noise(intervals: Vec<f64>, min_days: f64) -> Vec<f64> {
    intervals.into_iter().filter(|&d| d > min_days).collect()
}

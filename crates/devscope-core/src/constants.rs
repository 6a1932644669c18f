/// Observation count at which a developer's own history is fully trusted.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u32 = 10;

/// Observation count below which cold-start handling kicks in.
///
/// Deliberately independent of [`DEFAULT_CONFIDENCE_THRESHOLD`].
pub const DEFAULT_COLD_START_THRESHOLD: u32 = 5;

/// Laplace smoothing pseudo-count.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Weight above which a blended entry is still described as history-backed.
pub const SUFFICIENT_HISTORY_WEIGHT: f64 = 0.8;

/// Inter-event gaps at or below this many days are treated as noise.
pub const DEFAULT_MIN_INTERVAL_DAYS: f64 = 0.01;

/// Minimum number of usable intervals before a distribution is fitted.
pub const DEFAULT_MIN_INTERVALS: usize = 3;

/// Reactivation horizon in days.
pub const DEFAULT_HORIZON_DAYS: f64 = 30.0;

/// Probability reported when no distributional claim can be made.
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Newton iteration cap for the Weibull shape solver.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Relative convergence tolerance for the Weibull shape solver.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default weight of the tendency probability in a match score.
pub const DEFAULT_TENDENCY_WEIGHT: f64 = 0.7;

/// Default weight of the activity probability in a match score.
pub const DEFAULT_ACTIVITY_WEIGHT: f64 = 0.3;

/// Rounding precision (decimal places) per output field.
pub const WEIGHT_DECIMALS: i32 = 3;
pub const PROBABILITY_DECIMALS: i32 = 4;
pub const PARAMETER_DECIMALS: i32 = 4;
pub const INTERVAL_DECIMALS: i32 = 2;

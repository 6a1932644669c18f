//! Activity fitting over inter-event time distributions.
//!
//! Timestamps → sorted inter-arrival gaps (days) → two-parameter Weibull by
//! maximum likelihood, degrading to an exponential model and then to the
//! plain mean as data quality drops:
//!
//! ```text
//! f(t) = (k/λ)(t/λ)^(k−1) e^(−(t/λ)^k)
//! P(T ≤ 30) = 1 − e^(−(30/λ)^k)
//! E[T] = λ·Γ(1 + 1/k)
//! ```

pub mod exponential;
pub mod fitter;
pub mod intervals;
pub mod timestamps;
pub mod weibull;

pub use exponential::ExponentialFit;
pub use fitter::ActivityFitter;
pub use intervals::{filter_noise, inter_event_days};
pub use timestamps::{parse_all, parse_timestamp};
pub use weibull::{SolverOptions, WeibullFit};

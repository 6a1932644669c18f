//! Technology tendency estimation.
//!
//! Laplace smoothing over observed categories:
//!
//! ```text
//! P(T_i) = (n_i + α) / (N + α·K)
//! ```
//!
//! optionally blended with a community baseline using the confidence
//! weight `w`:
//!
//! ```text
//! P_final(T_i) = w·P_user(T_i) + (1 − w)·P_community(T_i)
//! ```

pub mod blend;
pub mod estimator;
pub mod laplace;

pub use blend::blend;
pub use estimator::TendencyEstimator;
pub use laplace::{most_common_category, smoothed_probabilities, tally, CategoryTally};

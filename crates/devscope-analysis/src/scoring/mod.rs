//! Match scoring: tendency and activity combined into one number.
//!
//! ```text
//! score = P_tendency(target)·w_t + P_active(30d)·w_a
//! ```

pub mod scorer;

pub use scorer::MatchScorer;

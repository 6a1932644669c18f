//! Distribution fitting errors.
//!
//! These never reach callers of the activity fitter; they select the next
//! model in the fallback chain.

use super::error_code::{self, DevscopeErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("Degenerate sample: {0}")]
    Degenerate(String),

    #[error("Solver did not converge after {iterations} iterations (last shape {last_shape})")]
    NotConverged { iterations: usize, last_shape: f64 },

    #[error("Invalid distribution parameters: {0}")]
    InvalidParameters(String),
}

impl DevscopeErrorCode for FitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Degenerate(_) => error_code::FIT_DEGENERATE,
            Self::NotConverged { .. } => error_code::FIT_NOT_CONVERGED,
            Self::InvalidParameters(_) => error_code::FIT_INVALID_PARAMETERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_per_variant() {
        assert_eq!(FitError::Degenerate("x".into()).error_code(), "FIT_DEGENERATE");
        let err = FitError::NotConverged {
            iterations: 100,
            last_shape: 2.5,
        };
        assert_eq!(err.error_code(), "FIT_NOT_CONVERGED");
        assert!(err.to_string().contains("100 iterations"));
        assert_eq!(
            FitError::InvalidParameters("x".into()).error_code(),
            "FIT_INVALID_PARAMETERS"
        );
    }
}

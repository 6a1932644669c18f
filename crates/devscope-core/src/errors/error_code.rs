//! Stable string codes for every devscope error.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const TIMESTAMP_PARSE_ERROR: &str = "TIMESTAMP_PARSE_ERROR";
pub const FIT_DEGENERATE: &str = "FIT_DEGENERATE";
pub const FIT_NOT_CONVERGED: &str = "FIT_NOT_CONVERGED";
pub const FIT_INVALID_PARAMETERS: &str = "FIT_INVALID_PARAMETERS";

/// Implemented by every error enum so callers can branch on a code string
/// instead of matching on variants across crate boundaries.
pub trait DevscopeErrorCode {
    fn error_code(&self) -> &'static str;
}

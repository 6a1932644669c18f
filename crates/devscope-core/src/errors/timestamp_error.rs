//! Timestamp parsing errors.

use super::error_code::{self, DevscopeErrorCode};

/// A timestamp in an activity batch could not be parsed.
///
/// A single bad element aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unparseable timestamp at index {index}: {input:?} ({reason})")]
pub struct TimestampError {
    pub index: usize,
    pub input: String,
    pub reason: String,
}

impl DevscopeErrorCode for TimestampError {
    fn error_code(&self) -> &'static str {
        error_code::TIMESTAMP_PARSE_ERROR
    }
}

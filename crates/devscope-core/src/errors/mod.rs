//! Error handling for devscope.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod fit_error;
pub mod timestamp_error;

pub use config_error::ConfigError;
pub use error_code::DevscopeErrorCode;
pub use fit_error::FitError;
pub use timestamp_error::TimestampError;

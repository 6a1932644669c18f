//! Tracing subscriber installation and span definitions.
//!
//! Components emit `tracing` events only; installing a subscriber is left
//! to the embedding binary via [`init_tracing`].

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "DEVSCOPE_LOG";

/// Create the span around one developer analysis.
#[macro_export]
macro_rules! analyze_span {
    ($project_count:expr, $timestamps:expr) => {
        tracing::info_span!(
            "devscope.analyze",
            project_count = $project_count,
            timestamps = $timestamps
        )
    };
}

/// Create the span around one activity fit.
#[macro_export]
macro_rules! fit_span {
    ($timestamps:expr) => {
        tracing::debug_span!("devscope.fit", timestamps = $timestamps)
    };
}

/// Create the span around scoring a batch of targets.
#[macro_export]
macro_rules! match_span {
    ($targets:expr) => {
        tracing::debug_span!("devscope.match", targets = $targets)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYZE: &str = "devscope.analyze";
    pub const FIT: &str = "devscope.fit";
    pub const MATCH: &str = "devscope.match";
}

/// Install a global `fmt` subscriber.
///
/// The filter comes from `DEVSCOPE_LOG` when set, otherwise from
/// `default_level` (e.g. the configured `observability.log_level`).
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

//! Top-level devscope configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ActivityConfig, ConfidenceConfig, ObservabilityConfig, ScoringConfig, TendencyConfig,
};
use crate::errors::ConfigError;

/// File name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "devscope.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DEVSCOPE_*`)
/// 2. Project config (`devscope.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DevscopeConfig {
    pub confidence: ConfidenceConfig,
    pub tendency: TendencyConfig,
    pub activity: ActivityConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl DevscopeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DevscopeConfig) -> Result<(), ConfigError> {
        if let Some(alpha) = config.tendency.alpha {
            if !alpha.is_finite() || alpha < 0.0 {
                return Err(invalid("tendency.alpha", "must be a finite value >= 0.0"));
            }
        }
        if let Some(days) = config.activity.min_interval_days {
            if !days.is_finite() || days < 0.0 {
                return Err(invalid(
                    "activity.min_interval_days",
                    "must be a finite value >= 0.0",
                ));
            }
        }
        if config.activity.min_intervals == Some(0) {
            return Err(invalid("activity.min_intervals", "must be at least 1"));
        }
        if let Some(horizon) = config.activity.horizon_days {
            if !horizon.is_finite() || horizon <= 0.0 {
                return Err(invalid("activity.horizon_days", "must be greater than 0"));
            }
        }
        if let Some(p) = config.activity.neutral_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(
                    "activity.neutral_probability",
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        if config.activity.max_iterations == Some(0) {
            return Err(invalid("activity.max_iterations", "must be at least 1"));
        }
        if let Some(tol) = config.activity.tolerance {
            if !tol.is_finite() || tol <= 0.0 {
                return Err(invalid("activity.tolerance", "must be greater than 0"));
            }
        }
        for (field, weight) in [
            ("scoring.tendency_weight", config.scoring.tendency_weight),
            ("scoring.activity_weight", config.scoring.activity_weight),
        ] {
            if let Some(w) = weight {
                if !w.is_finite() || w < 0.0 {
                    return Err(invalid(field, "must be a finite value >= 0.0"));
                }
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DevscopeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DevscopeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some`.
    fn merge(base: &mut DevscopeConfig, other: &DevscopeConfig) {
        // Confidence
        if other.confidence.threshold.is_some() {
            base.confidence.threshold = other.confidence.threshold;
        }
        if other.confidence.cold_start_threshold.is_some() {
            base.confidence.cold_start_threshold = other.confidence.cold_start_threshold;
        }

        // Tendency
        if other.tendency.alpha.is_some() {
            base.tendency.alpha = other.tendency.alpha;
        }

        // Activity
        if other.activity.min_interval_days.is_some() {
            base.activity.min_interval_days = other.activity.min_interval_days;
        }
        if other.activity.min_intervals.is_some() {
            base.activity.min_intervals = other.activity.min_intervals;
        }
        if other.activity.horizon_days.is_some() {
            base.activity.horizon_days = other.activity.horizon_days;
        }
        if other.activity.neutral_probability.is_some() {
            base.activity.neutral_probability = other.activity.neutral_probability;
        }
        if other.activity.max_iterations.is_some() {
            base.activity.max_iterations = other.activity.max_iterations;
        }
        if other.activity.tolerance.is_some() {
            base.activity.tolerance = other.activity.tolerance;
        }
        if other.activity.exponential_fallback.is_some() {
            base.activity.exponential_fallback = other.activity.exponential_fallback;
        }

        // Scoring
        if other.scoring.tendency_weight.is_some() {
            base.scoring.tendency_weight = other.scoring.tendency_weight;
        }
        if other.scoring.activity_weight.is_some() {
            base.scoring.activity_weight = other.scoring.activity_weight;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides from the process environment.
    /// Pattern: `DEVSCOPE_CONFIDENCE_THRESHOLD`, `DEVSCOPE_TENDENCY_ALPHA`, etc.
    pub fn apply_env_overrides(config: &mut DevscopeConfig) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply `DEVSCOPE_*` overrides using an arbitrary variable lookup.
    /// Values that fail to parse are skipped with a warning.
    pub fn apply_overrides_from<F>(config: &mut DevscopeConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_CONFIDENCE_THRESHOLD") {
            config.confidence.threshold = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_COLD_START_THRESHOLD") {
            config.confidence.cold_start_threshold = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_TENDENCY_ALPHA") {
            config.tendency.alpha = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_MIN_INTERVAL_DAYS") {
            config.activity.min_interval_days = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_MIN_INTERVALS") {
            config.activity.min_intervals = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_HORIZON_DAYS") {
            config.activity.horizon_days = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_NEUTRAL_PROBABILITY") {
            config.activity.neutral_probability = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_MAX_ITERATIONS") {
            config.activity.max_iterations = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_TOLERANCE") {
            config.activity.tolerance = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_ACTIVITY_EXPONENTIAL_FALLBACK") {
            config.activity.exponential_fallback = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_SCORING_TENDENCY_WEIGHT") {
            config.scoring.tendency_weight = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "DEVSCOPE_SCORING_ACTIVITY_WEIGHT") {
            config.scoring.activity_weight = Some(v);
        }
        if let Some(level) = lookup("DEVSCOPE_LOG_LEVEL") {
            config.observability.log_level = Some(level);
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

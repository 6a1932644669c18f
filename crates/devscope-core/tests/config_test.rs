use std::collections::HashMap;

use devscope_core::config::*;
use devscope_core::errors::{ConfigError, DevscopeErrorCode};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = DevscopeConfig::from_toml("").unwrap();

    assert_eq!(config.confidence.effective_threshold(), 10);
    assert_eq!(config.confidence.effective_cold_start_threshold(), 5);
    assert_eq!(config.tendency.effective_alpha(), 1.0);
    assert_eq!(config.activity.effective_min_interval_days(), 0.01);
    assert_eq!(config.activity.effective_min_intervals(), 3);
    assert_eq!(config.activity.effective_horizon_days(), 30.0);
    assert_eq!(config.activity.effective_neutral_probability(), 0.5);
    assert_eq!(config.activity.effective_max_iterations(), 100);
    assert!(config.activity.effective_exponential_fallback());
    assert_eq!(config.scoring.effective_tendency_weight(), 0.7);
    assert_eq!(config.scoring.effective_activity_weight(), 0.3);
    assert_eq!(config.observability.effective_log_level(), "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[confidence]
cold_start_threshold = 3

[activity]
exponential_fallback = false
"#;
    let config = DevscopeConfig::from_toml(toml).unwrap();
    assert_eq!(config.confidence.effective_cold_start_threshold(), 3);
    // Independent of the cold-start threshold.
    assert_eq!(config.confidence.effective_threshold(), 10);
    assert!(!config.activity.effective_exponential_fallback());
    assert_eq!(config.activity.effective_min_intervals(), 3);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = DevscopeConfig::from_toml("[confidence\nthreshold = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn config_serde_roundtrip() {
    let mut config = DevscopeConfig::default();
    config.tendency.alpha = Some(0.5);
    config.scoring.activity_weight = Some(0.25);
    let toml_str = config.to_toml().unwrap();
    let back = DevscopeConfig::from_toml(&toml_str).unwrap();
    assert_eq!(back.tendency.effective_alpha(), 0.5);
    assert_eq!(back.scoring.effective_activity_weight(), 0.25);
}

#[test]
fn validate_rejects_negative_alpha() {
    let config = DevscopeConfig::from_toml("[tendency]\nalpha = -1.0\n").unwrap();
    let err = DevscopeConfig::validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "tendency.alpha"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_accepts_zero_alpha() {
    let config = DevscopeConfig::from_toml("[tendency]\nalpha = 0.0\n").unwrap();
    assert!(DevscopeConfig::validate(&config).is_ok());
}

#[test]
fn validate_rejects_out_of_range_activity_settings() {
    for toml in [
        "[activity]\nneutral_probability = 1.5\n",
        "[activity]\nmin_intervals = 0\n",
        "[activity]\nhorizon_days = 0.0\n",
        "[activity]\ntolerance = -1e-3\n",
        "[scoring]\ntendency_weight = -0.1\n",
    ] {
        let config = DevscopeConfig::from_toml(toml).unwrap();
        let err = DevscopeConfig::validate(&config).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID", "for {toml}");
    }
}

#[test]
fn load_merges_project_file_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("devscope.toml"),
        "[confidence]\nthreshold = 20\n\n[scoring]\ntendency_weight = 0.6\n",
    )
    .unwrap();

    let config = DevscopeConfig::load(dir.path()).unwrap();
    assert_eq!(config.confidence.effective_threshold(), 20);
    assert_eq!(config.scoring.effective_tendency_weight(), 0.6);
    assert_eq!(config.scoring.effective_activity_weight(), 0.3);
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = DevscopeConfig::load(dir.path()).unwrap();
    assert_eq!(config.confidence.effective_threshold(), 10);
}

#[test]
fn load_reports_invalid_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("devscope.toml"), "not = [valid").unwrap();
    let err = DevscopeConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_take_priority_and_skip_garbage() {
    let vars: HashMap<&str, &str> = [
        ("DEVSCOPE_CONFIDENCE_THRESHOLD", "12"),
        ("DEVSCOPE_COLD_START_THRESHOLD", "not-a-number"),
        ("DEVSCOPE_TENDENCY_ALPHA", "0.25"),
        ("DEVSCOPE_LOG_LEVEL", "debug"),
    ]
    .into_iter()
    .collect();

    let mut config = DevscopeConfig::from_toml("[confidence]\nthreshold = 8\n").unwrap();
    DevscopeConfig::apply_overrides_from(&mut config, |k| vars.get(k).map(|v| v.to_string()));

    assert_eq!(config.confidence.effective_threshold(), 12);
    assert_eq!(config.confidence.effective_cold_start_threshold(), 5);
    assert_eq!(config.tendency.effective_alpha(), 0.25);
    assert_eq!(config.observability.effective_log_level(), "debug");
}

#[test]
fn env_overrides_cover_every_activity_setting() {
    let vars: HashMap<&str, &str> = [
        ("DEVSCOPE_ACTIVITY_MIN_INTERVAL_DAYS", "0.5"),
        ("DEVSCOPE_ACTIVITY_MIN_INTERVALS", "6"),
        ("DEVSCOPE_ACTIVITY_HORIZON_DAYS", "14"),
        ("DEVSCOPE_ACTIVITY_NEUTRAL_PROBABILITY", "0.4"),
        ("DEVSCOPE_ACTIVITY_MAX_ITERATIONS", "50"),
        ("DEVSCOPE_ACTIVITY_TOLERANCE", "1e-6"),
        ("DEVSCOPE_ACTIVITY_EXPONENTIAL_FALLBACK", "false"),
    ]
    .into_iter()
    .collect();

    let mut config = DevscopeConfig::default();
    DevscopeConfig::apply_overrides_from(&mut config, |k| vars.get(k).map(|v| v.to_string()));

    assert_eq!(config.activity.effective_min_interval_days(), 0.5);
    assert_eq!(config.activity.effective_min_intervals(), 6);
    assert_eq!(config.activity.effective_horizon_days(), 14.0);
    assert_eq!(config.activity.effective_neutral_probability(), 0.4);
    assert_eq!(config.activity.effective_max_iterations(), 50);
    assert_eq!(config.activity.effective_tolerance(), 1e-6);
    assert!(!config.activity.effective_exponential_fallback());
}

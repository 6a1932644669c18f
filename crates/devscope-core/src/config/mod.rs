//! Configuration system for devscope.
//! TOML-based, 3-layer resolution: env > project file > compiled defaults.

pub mod activity_config;
pub mod confidence_config;
pub mod devscope_config;
pub mod observability_config;
pub mod scoring_config;
pub mod tendency_config;

pub use activity_config::ActivityConfig;
pub use confidence_config::ConfidenceConfig;
pub use devscope_config::DevscopeConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use tendency_config::TendencyConfig;

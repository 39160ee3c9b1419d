//! Configuration system for Veil.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod anonymize_config;
pub mod defaults;
pub mod observability_config;
pub mod veil_config;

pub use anonymize_config::AnonymizeConfig;
pub use observability_config::ObservabilityConfig;
pub use veil_config::VeilConfig;

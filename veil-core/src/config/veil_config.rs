//! Top-level Veil configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, AnonymizeConfig, ObservabilityConfig};
use crate::constants::{MAX_DIGEST_LENGTH, MIN_DIGEST_LENGTH};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VEIL_*`)
/// 2. Project config (`veil.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VeilConfig {
    pub anonymize: AnonymizeConfig,
    pub observability: ObservabilityConfig,
}

impl VeilConfig {
    /// Load configuration from `root/veil.toml` (if present) and the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply `VEIL_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("VEIL_DEFAULT_SALT") {
            self.anonymize.default_salt = val;
        }
        if let Some(val) = lookup("VEIL_DIGEST_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                self.anonymize.digest_length = v;
            }
        }
        if let Some(val) = lookup("VEIL_LOG_LEVEL") {
            self.observability.log_level = val.to_lowercase();
        }
        if let Some(val) = lookup("VEIL_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &VeilConfig) -> Result<(), ConfigError> {
        let len = config.anonymize.digest_length;
        if !(MIN_DIGEST_LENGTH..=MAX_DIGEST_LENGTH).contains(&len) {
            return Err(ConfigError::ValidationFailed {
                field: "anonymize.digest_length".to_string(),
                message: format!(
                    "must be between {MIN_DIGEST_LENGTH} and {MAX_DIGEST_LENGTH}, got {len}"
                ),
            });
        }
        if config.anonymize.enabled_patterns.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "anonymize.enabled_patterns".to_string(),
                message: "at least one pattern must be enabled".to_string(),
            });
        }
        if !defaults::LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("unknown level '{}'", config.observability.log_level),
            });
        }
        Ok(())
    }
}

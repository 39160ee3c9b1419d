use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::PiiCategory;

/// Anonymization subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnonymizeConfig {
    /// Salt used when a caller does not supply one.
    pub default_salt: String,
    /// Hex characters of the SHA-256 digest kept in each placeholder.
    pub digest_length: usize,
    /// Structured-PII categories to detect. Always applied in canonical order.
    pub enabled_patterns: Vec<PiiCategory>,
}

impl Default for AnonymizeConfig {
    fn default() -> Self {
        Self {
            default_salt: defaults::DEFAULT_SALT.to_string(),
            digest_length: defaults::DEFAULT_DIGEST_LENGTH,
            enabled_patterns: defaults::DEFAULT_ENABLED_PATTERNS.to_vec(),
        }
    }
}

impl AnonymizeConfig {
    /// Whether detection for `category` is switched on.
    pub fn is_enabled(&self, category: PiiCategory) -> bool {
        self.enabled_patterns.contains(&category)
    }
}

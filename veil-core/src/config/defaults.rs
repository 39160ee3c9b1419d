// Single source of truth for all default values.

use crate::models::PiiCategory;

// --- Anonymize ---
pub const DEFAULT_SALT: &str = "";
pub const DEFAULT_DIGEST_LENGTH: usize = 8;
pub const DEFAULT_ENABLED_PATTERNS: [PiiCategory; 6] = PiiCategory::ALL;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "veil.toml";

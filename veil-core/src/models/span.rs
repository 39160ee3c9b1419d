use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SPAN_CATEGORY;

/// A sensitive substring identified outside this crate (by a model or classifier).
///
/// `category` is free-form and only namespaces the placeholder. Callers may
/// spell it `type`; a missing category falls back to `sensitive_data`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensitiveSpan {
    #[serde(default)]
    pub value: String,
    #[serde(alias = "type", default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_SPAN_CATEGORY.to_string()
}

impl SensitiveSpan {
    pub fn new(value: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            category: category.into(),
        }
    }
}

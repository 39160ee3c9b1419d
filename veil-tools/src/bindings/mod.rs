//! Tool handlers, grouped by domain.

pub mod anonymize;
pub mod transcript;

use serde::de::DeserializeOwned;
use serde_json::Value;

use veil_core::errors::ToolError;
use veil_core::VeilResult;

use crate::runtime::VeilRuntime;

/// Deserialize tool arguments; `null` is read as an empty object.
pub(crate) fn parse_args<T: DeserializeOwned>(tool: &str, args: &Value) -> VeilResult<T> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(args).map_err(|e| {
        ToolError::InvalidArguments {
            tool: tool.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// The caller's salt, or the configured default.
pub(crate) fn resolve_salt<'a>(rt: &'a VeilRuntime, salt: &'a Option<String>) -> &'a str {
    salt.as_deref().unwrap_or_else(|| rt.default_salt())
}

use serde_json::{Map, Value};

use veil_core::errors::TranscriptError;
use veil_core::json;

/// Borrow `messages` as a list.
pub fn as_list(messages: &Value) -> Result<&[Value], TranscriptError> {
    match messages {
        Value::Array(list) => Ok(list),
        other => Err(TranscriptError::NotAList {
            found: json::type_name(other).to_string(),
        }),
    }
}

/// Borrow message `index` as a record.
pub fn as_record(index: usize, message: &Value) -> Result<&Map<String, Value>, TranscriptError> {
    message
        .as_object()
        .ok_or_else(|| TranscriptError::InvalidMessage {
            index,
            reason: format!("expected an object, got {}", json::type_name(message)),
        })
}

/// Borrow every message as a record, failing on the first that is not one.
pub fn as_records(messages: &Value) -> Result<Vec<&Map<String, Value>>, TranscriptError> {
    as_list(messages)?
        .iter()
        .enumerate()
        .map(|(i, m)| as_record(i, m))
        .collect()
}

/// String field, if present and a string.
pub fn str_field<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

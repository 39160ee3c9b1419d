//! Identifier-field anonymization for message records.

use serde_json::{Map, Value};

use veil_core::constants::{COMPOSITE_KEY_FIELDS, IDENTIFIER_FIELDS};
use veil_core::errors::AnonymizeError;
use veil_core::json;
use veil_core::models::AnonymizedMessage;

use crate::placeholder::PlaceholderGenerator;

/// Anonymize the identifier fields of `message`, which must be a JSON object.
pub fn anonymize_identifiers(
    message: &Value,
    salt: &str,
    generator: &PlaceholderGenerator,
) -> Result<AnonymizedMessage, AnonymizeError> {
    match message {
        Value::Object(record) => Ok(anonymize_record(record, salt, generator)),
        other => Err(AnonymizeError::NotAMapping {
            found: json::type_name(other).to_string(),
        }),
    }
}

/// Shallow-copy `record`, replacing identifier fields with placeholders.
///
/// Plain identifiers are replaced only when truthy; composite keys whenever
/// present. No other field is touched and absent fields stay absent.
pub fn anonymize_record(
    record: &Map<String, Value>,
    salt: &str,
    generator: &PlaceholderGenerator,
) -> AnonymizedMessage {
    let mut anonymized = record.clone();
    let mut performed = Vec::new();

    for field in IDENTIFIER_FIELDS {
        let Some(value) = record.get(field).filter(|v| json::is_truthy(v)) else {
            continue;
        };
        let placeholder = generator.generate(&json::value_text(value), field, salt);
        anonymized.insert(field.to_string(), Value::String(placeholder));
        performed.push(field.to_string());
    }

    for (field, category) in COMPOSITE_KEY_FIELDS {
        let Some(value) = record.get(field) else {
            continue;
        };
        let placeholder = generator.generate(&json::value_text(value), category, salt);
        anonymized.insert(field.to_string(), Value::String(placeholder));
        performed.push(field.to_string());
    }

    AnonymizedMessage {
        anonymized_message: anonymized,
        anonymizations_performed: performed,
    }
}

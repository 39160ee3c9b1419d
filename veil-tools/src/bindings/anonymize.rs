//! Anonymization tools: spans, names, structured PII, identifiers, cache.

use serde::Deserialize;
use serde_json::{json, Value};

use veil_core::constants::PERSON_NAME_CATEGORY;
use veil_core::models::SensitiveSpan;
use veil_core::VeilResult;
use veil_observability::tracing_setup::events;

use super::{parse_args, resolve_salt};
use crate::runtime::VeilRuntime;

#[derive(Deserialize)]
struct ReplaceValuesArgs {
    #[serde(default)]
    text: String,
    #[serde(default)]
    values: Vec<SensitiveSpan>,
    salt: Option<String>,
}

/// Replace agent-identified values with category placeholders.
pub fn replace_sensitive_values(rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: ReplaceValuesArgs = parse_args("replace_sensitive_values", args)?;
    let salt = resolve_salt(rt, &args.salt);
    let result = rt.engine.substitute_spans(&args.text, &args.values, salt);

    let categories: Vec<&str> = result.replacements.iter().map(|r| r.category.as_str()).collect();
    events::text_anonymized(result.items_replaced, &categories);

    Ok(json!({
        "anonymized_text": result.anonymized_text,
        "replacements": result.replacements,
        "items_replaced": result.items_replaced,
    }))
}

#[derive(Deserialize)]
struct ReplaceNamesArgs {
    #[serde(default)]
    text: String,
    #[serde(default)]
    names: Vec<String>,
    salt: Option<String>,
}

/// Replace person names; shorthand for spans of category `person_name`.
pub fn replace_names_in_text(rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: ReplaceNamesArgs = parse_args("replace_names_in_text", args)?;
    let salt = resolve_salt(rt, &args.salt);
    let spans: Vec<SensitiveSpan> = args
        .names
        .iter()
        .map(|name| SensitiveSpan::new(name.as_str(), PERSON_NAME_CATEGORY))
        .collect();
    let result = rt.engine.substitute_spans(&args.text, &spans, salt);

    events::text_anonymized(result.items_replaced, &[PERSON_NAME_CATEGORY]);

    let replaced_names: Vec<Value> = result
        .replacements
        .iter()
        .map(|r| json!({"original": r.original, "replacement": r.replacement}))
        .collect();
    Ok(json!({
        "anonymized_text": result.anonymized_text,
        "replaced_names": replaced_names,
        "names_found": result.items_replaced > 0,
    }))
}

#[derive(Deserialize)]
struct TextArgs {
    #[serde(default)]
    text: String,
    salt: Option<String>,
}

/// Detect and replace structured PII.
pub fn anonymize_pii_patterns(rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: TextArgs = parse_args("anonymize_pii_patterns", args)?;
    let salt = resolve_salt(rt, &args.salt);
    let result = rt.engine.detect_and_anonymize(&args.text, salt);
    Ok(json!({
        "anonymized_text": result.anonymized_text,
        "detections": result.detections,
        "pii_found": result.pii_found,
    }))
}

#[derive(Deserialize)]
struct IdentifierArgs {
    #[serde(default)]
    message: Value,
    salt: Option<String>,
}

/// Replace the identifier fields of one message record.
pub fn anonymize_identifiers(rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: IdentifierArgs = parse_args("anonymize_identifiers", args)?;
    let salt = resolve_salt(rt, &args.salt);
    let result = rt.engine.anonymize_identifiers(&args.message, salt)?;
    Ok(json!({
        "anonymized_message": result.anonymized_message,
        "anonymizations_performed": result.anonymizations_performed,
    }))
}

/// Drop every cached placeholder.
pub fn clear_anonymization_cache(rt: &VeilRuntime, _args: &Value) -> VeilResult<Value> {
    let report = rt.engine.clear_cache();
    events::cache_cleared(report.cleared_count);
    Ok(json!({
        "cleared_count": report.cleared_count,
        "message": format!("Cleared {} cached anonymization mappings", report.cleared_count),
    }))
}

//! Transcript tools: whole-conversation anonymization, formatting, metadata,
//! feedback items.

use serde::Deserialize;
use serde_json::{json, Value};

use veil_core::models::SensitiveSpan;
use veil_core::VeilResult;
use veil_observability::tracing_setup::events;

use super::{parse_args, resolve_salt};
use crate::runtime::VeilRuntime;

#[derive(Deserialize)]
struct ConversationArgs {
    #[serde(default)]
    messages: Value,
    #[serde(default)]
    values: Vec<SensitiveSpan>,
    salt: Option<String>,
}

pub fn anonymize_conversation(rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: ConversationArgs = parse_args("anonymize_conversation", args)?;
    let salt = resolve_salt(rt, &args.salt);
    let result =
        veil_transcript::anonymize_conversation(&rt.engine, &args.messages, &args.values, salt)?;

    events::conversation_anonymized(result.messages.len(), result.identifier_fields);

    Ok(json!({
        "messages": result.messages,
        "replacements": result.replacements,
        "detections": result.detections,
        "identifier_fields": result.identifier_fields,
    }))
}

#[derive(Deserialize)]
struct MessagesArgs {
    #[serde(default)]
    messages: Value,
}

pub fn format_conversation_for_summary(_rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: MessagesArgs = parse_args("format_conversation_for_summary", args)?;
    let result = veil_transcript::format_conversation(&args.messages)?;
    Ok(json!({
        "formatted_conversation": result.formatted_conversation,
        "message_count": result.message_count,
    }))
}

pub fn extract_conversation_metadata(_rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: MessagesArgs = parse_args("extract_conversation_metadata", args)?;
    let meta = veil_transcript::extract_metadata(&args.messages)?;
    Ok(json!({
        "total_messages": meta.total_messages,
        "user_messages": meta.user_messages,
        "assistant_messages": meta.assistant_messages,
        "has_timestamps": meta.has_timestamps,
        "average_message_length": meta.average_message_length,
        "conversation_turns": meta.conversation_turns,
        "duration_seconds": meta.duration_seconds,
        "feedback": meta.feedback,
    }))
}

#[derive(Deserialize)]
struct FeedbackArgs {
    category: String,
    severity: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    recommendation: String,
}

pub fn categorize_feedback(_rt: &VeilRuntime, args: &Value) -> VeilResult<Value> {
    let args: FeedbackArgs = parse_args("categorize_feedback", args)?;
    let item = veil_transcript::categorize_feedback(
        &args.category,
        &args.severity,
        &args.description,
        &args.recommendation,
    );
    Ok(json!({ "feedback_item": item }))
}

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use veil_core::errors::TranscriptError;
use veil_core::json;
use veil_core::models::{ConversationMetadata, FeedbackSignals};

use crate::content::content_len;
use crate::messages::{as_records, str_field};

const TIMESTAMP_FIELDS: [&str; 2] = ["timestamp", "created_at"];

/// Structural statistics over a conversation.
pub fn extract_metadata(messages: &Value) -> Result<ConversationMetadata, TranscriptError> {
    let records = as_records(messages)?;

    let count_role = |role: &str| {
        records
            .iter()
            .filter(|r| str_field(r, "role") == Some(role))
            .count()
    };
    let user_messages = count_role("user");
    let assistant_messages = count_role("assistant");

    let has_timestamps = records.iter().any(|r| {
        TIMESTAMP_FIELDS
            .iter()
            .any(|f| r.get(*f).is_some_and(json::is_truthy))
    });

    let lengths: Vec<usize> = records
        .iter()
        .filter_map(|r| match r.get("content") {
            Some(content) => content_len(content),
            None => Some(0),
        })
        .collect();

    Ok(ConversationMetadata {
        total_messages: records.len(),
        user_messages,
        assistant_messages,
        has_timestamps,
        average_message_length: average_rounded(&lengths),
        conversation_turns: user_messages.min(assistant_messages),
        duration_seconds: duration_seconds(&records),
        feedback: feedback_signals(&records),
    })
}

fn average_rounded(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    (avg * 10.0).round() / 10.0
}

fn parse_timestamp(record: &Map<String, Value>) -> Option<DateTime<FixedOffset>> {
    TIMESTAMP_FIELDS
        .iter()
        .filter_map(|f| str_field(record, f))
        .find_map(|raw| DateTime::parse_from_rfc3339(raw).ok())
}

/// Span between the earliest and latest parseable timestamp.
fn duration_seconds(records: &[&Map<String, Value>]) -> Option<i64> {
    let stamps: Vec<_> = records.iter().filter_map(|r| parse_timestamp(r)).collect();
    if stamps.len() < 2 {
        return None;
    }
    let first = stamps.iter().min()?;
    let last = stamps.iter().max()?;
    Some((*last - *first).num_seconds())
}

fn feedback_signals(records: &[&Map<String, Value>]) -> FeedbackSignals {
    let mut signals = FeedbackSignals::default();
    for record in records {
        match str_field(record, "verso").map(str::to_lowercase).as_deref() {
            Some("up") => signals.thumbs_up += 1,
            Some("down") => signals.thumbs_down += 1,
            _ => {}
        }
        if str_field(record, "feedback").is_some_and(|c| !c.trim().is_empty()) {
            signals.comments += 1;
        }
    }
    signals
}

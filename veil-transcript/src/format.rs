use serde_json::Value;

use veil_core::errors::TranscriptError;
use veil_core::models::FormattedConversation;

use crate::content::content_text;
use crate::messages::{as_records, str_field};

/// Render messages as `[ROLE]: content` blocks separated by a blank line.
pub fn format_conversation(messages: &Value) -> Result<FormattedConversation, TranscriptError> {
    let records = as_records(messages)?;

    let blocks: Vec<String> = records
        .iter()
        .map(|record| {
            let role = str_field(record, "role").unwrap_or("unknown").to_uppercase();
            let content = record.get("content").map(content_text).unwrap_or_default();
            format!("[{role}]: {content}")
        })
        .collect();

    Ok(FormattedConversation {
        formatted_conversation: blocks.join("\n\n"),
        message_count: records.len(),
    })
}

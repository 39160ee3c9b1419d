use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{PiiCategory, Replacement};

/// A transcript rendered as `[ROLE]: content` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedConversation {
    pub formatted_conversation: String,
    pub message_count: usize,
}

/// Counts of explicit user feedback found on messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSignals {
    pub thumbs_up: usize,
    pub thumbs_down: usize,
    pub comments: usize,
}

/// Structural metadata about a transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationMetadata {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub has_timestamps: bool,
    /// Mean content length in characters, rounded to one decimal.
    pub average_message_length: f64,
    pub conversation_turns: usize,
    /// Seconds between the earliest and latest parseable timestamps.
    pub duration_seconds: Option<i64>,
    pub feedback: FeedbackSignals,
}

/// A transcript with identifiers and free text anonymized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnonymizedConversation {
    pub messages: Vec<Value>,
    pub replacements: Vec<Replacement>,
    pub detections: Vec<PiiCategory>,
    /// Total identifier fields replaced across all messages.
    pub identifier_fields: usize,
}

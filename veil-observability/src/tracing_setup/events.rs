//! Structured log events for tool-boundary operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a successful tool call.
pub fn tool_succeeded(tool: &str) {
    tracing::info!(event = "tool_succeeded", tool = %tool, "tool call succeeded");
}

/// Log a tool call that returned an error envelope.
pub fn tool_failed(tool: &str, error_code: &str, message: &str) {
    tracing::warn!(
        event = "tool_failed",
        tool = %tool,
        error_code = %error_code,
        message = %message,
        "tool call failed"
    );
}

/// Log a finished text anonymization pass.
pub fn text_anonymized(spans_replaced: usize, categories: &[&str]) {
    tracing::info!(
        event = "text_anonymized",
        spans_replaced = spans_replaced,
        categories = ?categories,
        "text anonymized"
    );
}

/// Log a whole-conversation anonymization.
pub fn conversation_anonymized(messages: usize, identifier_fields: usize) {
    tracing::info!(
        event = "conversation_anonymized",
        messages = messages,
        identifier_fields = identifier_fields,
        "conversation anonymized"
    );
}

/// Log a cache reset.
pub fn cache_cleared(cleared: usize) {
    tracing::info!(event = "cache_cleared", cleared = cleared, "anonymization cache cleared");
}

/// Log runtime initialization.
pub fn runtime_initialized(digest_length: usize, patterns: usize) {
    tracing::info!(
        event = "runtime_initialized",
        digest_length = digest_length,
        patterns = patterns,
        "veil runtime initialized"
    );
}

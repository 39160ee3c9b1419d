/// Category used for a span supplied without one.
pub const DEFAULT_SPAN_CATEGORY: &str = "sensitive_data";

/// Category used by the names-only substitution tool.
pub const PERSON_NAME_CATEGORY: &str = "person_name";

/// Identifier fields anonymized only when present and truthy.
/// Each field name doubles as its placeholder category.
pub const IDENTIFIER_FIELDS: [&str; 5] = ["message_id", "thread_id", "org_id", "user_id", "tenant_id"];

/// Composite key fields anonymized whenever present, paired with their category.
pub const COMPOSITE_KEY_FIELDS: [(&str, &str); 3] =
    [("PK", "pk"), ("SK", "sk"), ("SKMessage", "sk_message")];

/// Free-text message fields routed through the text pipeline.
pub const FREE_TEXT_FIELDS: [&str; 2] = ["content", "feedback"];

/// Bounds for the configurable placeholder digest width (hex characters).
pub const MIN_DIGEST_LENGTH: usize = 8;
pub const MAX_DIGEST_LENGTH: usize = 64;

use serde::{Deserialize, Serialize};

/// One distinct span that was substituted, however many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub original: String,
    pub category: String,
    pub replacement: String,
}

/// Output of span substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanSubstitution {
    pub anonymized_text: String,
    pub replacements: Vec<Replacement>,
    /// Number of replacement entries, not occurrences.
    pub items_replaced: usize,
}

use serde_json::Value;

use crate::errors::AnonymizeError;
use crate::models::{AnonymizedMessage, SensitiveSpan, TextAnonymization};

/// De-identification of free text and message records.
pub trait ITextAnonymizer: Send + Sync {
    /// Replace the given spans, then any structured PII, in `text`.
    fn anonymize_text(&self, text: &str, spans: &[SensitiveSpan], salt: &str)
        -> TextAnonymization;

    /// Replace the identifier fields of a message record.
    fn anonymize_identifiers(
        &self,
        message: &Value,
        salt: &str,
    ) -> Result<AnonymizedMessage, AnonymizeError>;
}

use std::collections::HashSet;

use serde_json::Value;

use veil_core::constants::FREE_TEXT_FIELDS;
use veil_core::errors::TranscriptError;
use veil_core::models::{AnonymizedConversation, PiiCategory, Replacement, SensitiveSpan};
use veil_core::traits::ITextAnonymizer;

use crate::content::rewrite_text;
use crate::messages::{as_list, as_record};

/// Anonymize every message of a conversation.
///
/// Identifier fields go through the record anonymizer; `content` and
/// `feedback` go through the text pipeline with the same spans and salt.
/// Every element is checked before any work is done, so a malformed
/// conversation fails without touching the placeholder cache.
pub fn anonymize_conversation(
    anonymizer: &dyn ITextAnonymizer,
    messages: &Value,
    spans: &[SensitiveSpan],
    salt: &str,
) -> Result<AnonymizedConversation, TranscriptError> {
    let list = as_list(messages)?;
    for (index, message) in list.iter().enumerate() {
        as_record(index, message)?;
    }

    let mut merged = MergedResults::default();
    let mut out = Vec::with_capacity(list.len());
    let mut identifier_fields = 0;

    for (index, message) in list.iter().enumerate() {
        let record = anonymizer
            .anonymize_identifiers(message, salt)
            .map_err(|e| TranscriptError::InvalidMessage {
                index,
                reason: e.to_string(),
            })?;
        identifier_fields += record.anonymizations_performed.len();

        let mut fields = record.anonymized_message;
        for field in FREE_TEXT_FIELDS {
            if let Some(value) = fields.get_mut(field) {
                rewrite_text(value, &mut |text| {
                    let result = anonymizer.anonymize_text(text, spans, salt);
                    merged.absorb(result.replacements, &result.detections);
                    result.anonymized_text
                });
            }
        }
        out.push(Value::Object(fields));
    }

    tracing::debug!(
        messages = out.len(),
        identifier_fields,
        replacements = merged.replacements.len(),
        "conversation anonymized"
    );

    let detections = merged.detections();
    Ok(AnonymizedConversation {
        messages: out,
        replacements: merged.replacements,
        detections,
        identifier_fields,
    })
}

#[derive(Default)]
struct MergedResults {
    replacements: Vec<Replacement>,
    seen: HashSet<(String, String)>,
    detected: HashSet<PiiCategory>,
}

impl MergedResults {
    fn absorb(&mut self, replacements: Vec<Replacement>, detections: &[PiiCategory]) {
        for r in replacements {
            if self.seen.insert((r.original.clone(), r.category.clone())) {
                self.replacements.push(r);
            }
        }
        self.detected.extend(detections.iter().copied());
    }

    /// Union of detections in canonical category order.
    fn detections(&self) -> Vec<PiiCategory> {
        PiiCategory::ALL
            .into_iter()
            .filter(|c| self.detected.contains(c))
            .collect()
    }
}

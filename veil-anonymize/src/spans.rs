//! Longest-first literal substitution of externally identified spans.

use std::cmp::Reverse;
use std::collections::HashSet;

use veil_core::models::{Replacement, SensitiveSpan, SpanSubstitution};

use crate::placeholder::PlaceholderGenerator;

/// Replace every literal occurrence of each span's value with its placeholder.
///
/// Spans are deduplicated, then applied longest value first so a shorter value
/// contained in a longer one cannot split it. A value that no longer occurs in
/// the text is skipped. One [`Replacement`] is recorded per distinct span.
pub fn substitute_spans(
    text: &str,
    spans: &[SensitiveSpan],
    salt: &str,
    generator: &PlaceholderGenerator,
) -> SpanSubstitution {
    if text.is_empty() {
        return SpanSubstitution::default();
    }
    if spans.is_empty() {
        return SpanSubstitution {
            anonymized_text: text.to_string(),
            ..SpanSubstitution::default()
        };
    }

    let mut anonymized = text.to_string();
    let mut replacements = Vec::new();

    for span in order_spans(spans) {
        if span.value.is_empty() || !anonymized.contains(span.value.as_str()) {
            continue;
        }
        let placeholder = generator.generate(&span.value, &span.category, salt);
        anonymized = anonymized.replace(span.value.as_str(), &placeholder);
        replacements.push(Replacement {
            original: span.value.clone(),
            category: span.category.clone(),
            replacement: placeholder,
        });
    }

    SpanSubstitution {
        anonymized_text: anonymized,
        items_replaced: replacements.len(),
        replacements,
    }
}

/// Drop repeated (value, category) pairs, then stable-sort by value length
/// in characters, longest first.
fn order_spans(spans: &[SensitiveSpan]) -> Vec<&SensitiveSpan> {
    let mut seen = HashSet::new();
    let mut ordered: Vec<&SensitiveSpan> = spans
        .iter()
        .filter(|s| seen.insert((s.value.as_str(), s.category.as_str())))
        .collect();
    ordered.sort_by_key(|s| Reverse(s.value.chars().count()));
    ordered
}

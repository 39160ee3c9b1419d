//! Structured-PII detection and substitution.

use std::cmp::Reverse;

use veil_core::models::PiiDetection;

use crate::patterns::PiiPattern;
use crate::placeholder::PlaceholderGenerator;

/// Scan `text` with each pattern in turn and replace every distinct match.
///
/// Each pattern sees the output of the previous one, so a literal already
/// replaced by an earlier category (or by span substitution) is never matched
/// twice. Within one category, longer literals are replaced first.
pub fn detect_and_anonymize(
    text: &str,
    salt: &str,
    patterns: &[PiiPattern],
    generator: &PlaceholderGenerator,
) -> PiiDetection {
    if text.is_empty() {
        return PiiDetection::default();
    }

    let mut anonymized = text.to_string();
    let mut detections = Vec::new();

    for pat in patterns {
        let Some(re) = pat.regex.as_ref() else {
            tracing::warn!(
                pattern = %pat.category,
                "pii pattern failed to compile, skipping"
            );
            continue;
        };

        let mut literals: Vec<String> = Vec::new();
        for m in re.find_iter(&anonymized) {
            if !literals.iter().any(|l| l == m.as_str()) {
                literals.push(m.as_str().to_string());
            }
        }
        if literals.is_empty() {
            continue;
        }
        literals.sort_by_key(|l| Reverse(l.len()));

        for literal in &literals {
            let placeholder = generator.generate(literal, pat.category.as_str(), salt);
            anonymized = anonymized.replace(literal.as_str(), &placeholder);
        }
        detections.push(pat.category);
    }

    PiiDetection {
        anonymized_text: anonymized,
        pii_found: !detections.is_empty(),
        detections,
    }
}

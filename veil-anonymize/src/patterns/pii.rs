use regex::Regex;
use std::sync::LazyLock;

use veil_core::PiiCategory;

/// A compiled structured-PII detection pattern.
pub struct PiiPattern {
    pub category: PiiCategory,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Email ──────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// ── Phone (US-style, optional +1 and separators) ──────────────────────────
pii_pattern!(
    RE_PHONE,
    r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b"
);

// ── SSN ────────────────────────────────────────────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

// ── Credit card (four groups of four) ─────────────────────────────────────
pii_pattern!(RE_CREDIT_CARD, r"\b(?:\d{4}[-\s]?){3}\d{4}\b");

// ── IPv4 (no octet range check) ────────────────────────────────────────────
pii_pattern!(RE_IPV4, r"\b(?:\d{1,3}\.){3}\d{1,3}\b");

// ── UUID (canonical 8-4-4-4-12) ───────────────────────────────────────────
pii_pattern!(
    RE_UUID,
    r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b"
);

fn regex_for(category: PiiCategory) -> &'static LazyLock<Option<Regex>> {
    match category {
        PiiCategory::Email => &RE_EMAIL,
        PiiCategory::Phone => &RE_PHONE,
        PiiCategory::Ssn => &RE_SSN,
        PiiCategory::CreditCard => &RE_CREDIT_CARD,
        PiiCategory::IpAddress => &RE_IPV4,
        PiiCategory::Uuid => &RE_UUID,
    }
}

/// Returns all structured-PII patterns in application order.
pub fn all_patterns() -> Vec<PiiPattern> {
    patterns_for(&PiiCategory::ALL)
}

/// Patterns for the enabled categories, always in canonical application
/// order regardless of how `enabled` is ordered.
pub fn patterns_for(enabled: &[PiiCategory]) -> Vec<PiiPattern> {
    PiiCategory::ALL
        .into_iter()
        .filter(|c| enabled.contains(c))
        .map(|category| PiiPattern {
            category,
            regex: regex_for(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles_in_canonical_order() {
        let patterns = all_patterns();
        let categories: Vec<PiiCategory> = patterns.iter().map(|p| p.category).collect();
        assert_eq!(categories, PiiCategory::ALL);
        assert!(patterns.iter().all(|p| p.regex.is_some()));
    }

    #[test]
    fn enabled_order_does_not_change_application_order() {
        let patterns = patterns_for(&[PiiCategory::Uuid, PiiCategory::Email]);
        let categories: Vec<PiiCategory> = patterns.iter().map(|p| p.category).collect();
        assert_eq!(categories, [PiiCategory::Email, PiiCategory::Uuid]);
    }

    #[test]
    fn email_tld_rejects_pipe() {
        let Some(re) = RE_EMAIL.as_ref() else {
            panic!("email pattern failed to compile");
        };
        assert!(re.is_match("ops@corp.io"));
        assert!(!re.is_match("ops@corp.|o"));
    }
}

use std::sync::Arc;

use serde_json::Value;

use veil_core::config::AnonymizeConfig;
use veil_core::errors::AnonymizeError;
use veil_core::models::{
    AnonymizedMessage, CacheClearReport, PiiDetection, SensitiveSpan, SpanSubstitution,
    TextAnonymization,
};
use veil_core::traits::{IPlaceholderStore, ITextAnonymizer};

use crate::cache::PlaceholderCache;
use crate::patterns::{self, PiiPattern};
use crate::placeholder::PlaceholderGenerator;
use crate::{detector, identifiers, spans};

/// De-identification engine: span substitution, structured-PII detection and
/// identifier anonymization over one shared placeholder store.
///
/// Implements `ITextAnonymizer` from veil-core. Identical input under the
/// same salt always yields the same placeholder; different salts are isolated.
pub struct AnonymizationEngine {
    generator: PlaceholderGenerator,
    patterns: Vec<PiiPattern>,
}

impl AnonymizationEngine {
    /// Engine with default configuration over a private cache.
    pub fn new() -> Self {
        Self::from_config(&AnonymizeConfig::default())
    }

    /// Engine over a private cache.
    pub fn from_config(config: &AnonymizeConfig) -> Self {
        Self::with_store(Arc::new(PlaceholderCache::new()), config)
    }

    /// Engine over a caller-provided store, e.g. one shared process-wide.
    pub fn with_store(store: Arc<dyn IPlaceholderStore>, config: &AnonymizeConfig) -> Self {
        Self {
            generator: PlaceholderGenerator::with_store(store)
                .with_digest_length(config.digest_length),
            patterns: patterns::patterns_for(&config.enabled_patterns),
        }
    }

    pub fn generator(&self) -> &PlaceholderGenerator {
        &self.generator
    }

    /// Placeholder for a single value.
    pub fn generate(&self, original: &str, category: &str, salt: &str) -> String {
        self.generator.generate(original, category, salt)
    }

    /// Replace externally identified spans in `text`.
    pub fn substitute_spans(
        &self,
        text: &str,
        spans: &[SensitiveSpan],
        salt: &str,
    ) -> SpanSubstitution {
        let result = spans::substitute_spans(text, spans, salt, &self.generator);
        tracing::debug!(
            event = "spans_substituted",
            spans = spans.len(),
            items_replaced = result.items_replaced,
            "span substitution complete"
        );
        result
    }

    /// Detect and replace structured PII in `text`.
    pub fn detect_and_anonymize(&self, text: &str, salt: &str) -> PiiDetection {
        let result = detector::detect_and_anonymize(text, salt, &self.patterns, &self.generator);
        tracing::debug!(
            event = "pii_detected",
            categories = ?result.detections,
            "structured pii pass complete"
        );
        result
    }

    /// Anonymize a message record's identifier fields.
    pub fn anonymize_identifiers(
        &self,
        message: &Value,
        salt: &str,
    ) -> Result<AnonymizedMessage, AnonymizeError> {
        let result = identifiers::anonymize_identifiers(message, salt, &self.generator)?;
        tracing::debug!(
            event = "identifiers_anonymized",
            fields = result.anonymizations_performed.len(),
            "identifier fields anonymized"
        );
        Ok(result)
    }

    /// Drop every cached placeholder. Future placeholders are unchanged.
    pub fn clear_cache(&self) -> CacheClearReport {
        let report = self.generator.clear();
        tracing::debug!(
            event = "cache_cleared",
            cleared = report.cleared_count,
            "placeholder cache cleared"
        );
        report
    }

    /// Total cached placeholders across all salts.
    pub fn cached_entries(&self) -> usize {
        self.generator.store().len()
    }
}

impl Default for AnonymizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ITextAnonymizer for AnonymizationEngine {
    fn anonymize_text(
        &self,
        text: &str,
        spans: &[SensitiveSpan],
        salt: &str,
    ) -> TextAnonymization {
        let substituted = self.substitute_spans(text, spans, salt);
        let detected = self.detect_and_anonymize(&substituted.anonymized_text, salt);
        TextAnonymization {
            anonymized_text: detected.anonymized_text,
            replacements: substituted.replacements,
            detections: detected.detections,
        }
    }

    fn anonymize_identifiers(
        &self,
        message: &Value,
        salt: &str,
    ) -> Result<AnonymizedMessage, AnonymizeError> {
        AnonymizationEngine::anonymize_identifiers(self, message, salt)
    }
}

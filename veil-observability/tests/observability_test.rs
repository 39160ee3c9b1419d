use veil_core::config::ObservabilityConfig;
use veil_observability::tracing_setup::events;
use veil_observability::{init_tracing, init_tracing_with_filter};

#[test]
fn second_init_reports_existing_subscriber() {
    // Whichever call runs first installs the subscriber; the other must not panic.
    let first = init_tracing_with_filter("debug");
    let second = init_tracing(&ObservabilityConfig::default());
    assert!(!(first && second));
}

#[test]
fn events_emit_without_a_subscriber() {
    events::tool_succeeded("anonymize_pii_patterns");
    events::tool_failed("anonymize_identifiers", "INVALID_SHAPE", "message must be a mapping");
    events::text_anonymized(2, &["email", "phone"]);
    events::conversation_anonymized(4, 12);
    events::cache_cleared(3);
    events::runtime_initialized(8, 6);
}

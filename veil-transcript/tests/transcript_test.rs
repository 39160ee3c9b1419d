use serde::Deserialize;
use serde_json::{json, Value};
use veil_anonymize::AnonymizationEngine;
use veil_core::errors::TranscriptError;
use veil_core::models::{Replacement, SensitiveSpan};
use veil_core::PiiCategory;
use veil_transcript::{anonymize_conversation, extract_metadata, format_conversation};

#[derive(Deserialize)]
struct ConversationCase {
    description: String,
    salt: String,
    messages: Value,
    spans: Vec<SensitiveSpan>,
    expected_messages: Vec<Value>,
    expected_replacements: Vec<Replacement>,
    expected_detections: Vec<PiiCategory>,
    expected_identifier_fields: usize,
    expected_formatted: String,
    expected_duration_seconds: i64,
}

fn golden() -> ConversationCase {
    test_fixtures::load_fixture("golden/transcript/conversation.json")
}

#[test]
fn golden_conversation_anonymization() {
    let case = golden();
    let engine = AnonymizationEngine::new();
    let out = anonymize_conversation(&engine, &case.messages, &case.spans, &case.salt).unwrap();

    assert_eq!(out.messages, case.expected_messages, "{}", case.description);
    assert_eq!(out.replacements, case.expected_replacements);
    assert_eq!(out.detections, case.expected_detections);
    assert_eq!(out.identifier_fields, case.expected_identifier_fields);
}

#[test]
fn golden_conversation_formatting_and_metadata() {
    let case = golden();
    let formatted = format_conversation(&case.messages).unwrap();
    assert_eq!(formatted.formatted_conversation, case.expected_formatted);
    assert_eq!(formatted.message_count, 2);

    let meta = extract_metadata(&case.messages).unwrap();
    assert_eq!(meta.duration_seconds, Some(case.expected_duration_seconds));
    assert_eq!(meta.conversation_turns, 1);
    assert_eq!(meta.feedback.thumbs_down, 1);
    assert_eq!(meta.feedback.comments, 1);
}

#[test]
fn same_name_in_every_message_gets_one_placeholder() {
    let messages = test_fixtures::conversation(&[
        ("user", "This is Priya Natarajan."),
        ("assistant", "Hello Priya Natarajan."),
        ("user", "Priya Natarajan again."),
    ]);
    let spans = [SensitiveSpan::new("Priya Natarajan", "person_name")];
    let engine = AnonymizationEngine::new();
    let out = anonymize_conversation(&engine, &messages, &spans, "s").unwrap();

    assert_eq!(out.replacements.len(), 1);
    let placeholder = &out.replacements[0].replacement;
    for message in &out.messages {
        let content = message["content"].as_str().unwrap();
        assert!(content.contains(placeholder.as_str()));
        assert!(!content.contains("Priya"));
    }
    // Shared thread id hashes identically across messages.
    assert_eq!(out.messages[0]["thread_id"], out.messages[2]["thread_id"]);
}

#[test]
fn malformed_conversation_leaves_cache_untouched() {
    let engine = AnonymizationEngine::new();
    let messages = json!([{"message_id": "m1", "content": "a@b.io"}, 42]);
    let err = anonymize_conversation(&engine, &messages, &[], "s").unwrap_err();
    assert!(matches!(err, TranscriptError::InvalidMessage { index: 1, .. }));
    assert_eq!(engine.cached_entries(), 0);

    let err = anonymize_conversation(&engine, &json!("nope"), &[], "s").unwrap_err();
    assert_eq!(err.to_string(), "messages must be a list, got string");
}

#[test]
fn non_text_fields_pass_through() {
    let engine = AnonymizationEngine::new();
    let messages = json!([{"role": "user", "content": null, "rating": 5, "feedback": 3}]);
    let out = anonymize_conversation(&engine, &messages, &[], "s").unwrap();
    assert_eq!(out.messages[0], messages[0]);
    assert!(out.replacements.is_empty());
    assert!(out.detections.is_empty());
    assert_eq!(out.identifier_fields, 0);
}

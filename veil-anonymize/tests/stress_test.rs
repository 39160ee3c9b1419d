//! Concurrent access to one shared engine.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use veil_anonymize::AnonymizationEngine;

#[test]
fn concurrent_generation_is_consistent() {
    let engine = Arc::new(AnonymizationEngine::new());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..500)
                    .map(|i| engine.generate(&format!("user-{}", i % 50), "username", "shared"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
    let distinct: HashSet<&String> = results[0].iter().collect();
    assert_eq!(distinct.len(), 50);
    assert_eq!(engine.cached_entries(), 50);
}

#[test]
fn clear_during_generation_never_changes_outputs() {
    let engine = Arc::new(AnonymizationEngine::new());
    let expected = engine.generate("Jennifer Martinez", "person_name", "c");

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            (0..1_000)
                .map(|_| engine.generate("Jennifer Martinez", "person_name", "c"))
                .collect::<Vec<_>>()
        })
    };
    let clearer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..200 {
                engine.clear_cache();
            }
        })
    };

    clearer.join().unwrap();
    let outputs = writer.join().unwrap();
    assert!(outputs.iter().all(|p| p == &expected));
}

#[test]
fn large_text_with_many_spans() {
    let engine = AnonymizationEngine::new();
    let names: Vec<String> = (0..200).map(|i| format!("Person{i:03}")).collect();
    let text = names.join(" met ");
    let spans: Vec<_> = names
        .iter()
        .map(|n| veil_core::SensitiveSpan::new(n.clone(), "person_name"))
        .collect();

    let result = engine.substitute_spans(&text, &spans, "bulk");
    assert_eq!(result.items_replaced, 200);
    assert!(!result.anonymized_text.contains("Person"));
}

//! The global runtime is process-wide, so this binary holds a single test.

use std::fs;

use serde_json::json;
use veil_core::VeilErrorCode;
use veil_tools::runtime::{self, RuntimeOptions};

#[test]
fn global_runtime_initializes_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("veil.toml"),
        "[anonymize]\ndigest_length = 12\n",
    )
    .unwrap();

    assert!(!runtime::is_initialized());
    runtime::initialize(RuntimeOptions {
        project_root: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert!(runtime::is_initialized());
    assert_eq!(runtime::get().engine.generator().digest_length(), 12);

    let err = runtime::initialize(RuntimeOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "tool error: runtime already initialized");
    assert!(!err.error_code().is_empty());

    let out = veil_tools::call_tool("replace_names_in_text", &json!({"text": "Bo", "names": ["Bo"]}));
    let text = out["anonymized_text"].as_str().unwrap();
    // "[PERSON_NAME_" + 12 hex digits + "]"
    assert_eq!(text.len(), 13 + 12 + 1);
}

//! Test fixture loader for Veil golden datasets.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Build a conversation from `(role, content)` pairs with sequential ids.
pub fn conversation(turns: &[(&str, &str)]) -> serde_json::Value {
    let messages: Vec<serde_json::Value> = turns
        .iter()
        .enumerate()
        .map(|(i, (role, content))| {
            serde_json::json!({
                "PK": "org123#tenantA#user456#thread789",
                "SK": format!("MSG#{i:019}#msg_{i}"),
                "message_id": format!("msg_{i}"),
                "thread_id": "thread789",
                "role": role,
                "content": content,
            })
        })
        .collect();
    serde_json::Value::Array(messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_directories_exist() {
        assert!(fixture_exists("golden/anonymize"));
        assert!(fixture_exists("golden/transcript"));
        assert!(!list_fixtures("golden/anonymize").is_empty());
    }

    #[test]
    fn conversation_builder_numbers_messages() {
        let conv = conversation(&[("user", "hi"), ("assistant", "hello")]);
        let msgs = conv.as_array().unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[1]["message_id"], "msg_1");
        assert_eq!(msgs[0]["SK"], "MSG#0000000000000000000#msg_0");
    }
}

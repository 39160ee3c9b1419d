use std::collections::HashMap;

use veil_core::config::*;
use veil_core::errors::ConfigError;
use veil_core::PiiCategory;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VeilConfig::from_toml("").unwrap();

    // Anonymize defaults
    assert_eq!(config.anonymize.default_salt, "");
    assert_eq!(config.anonymize.digest_length, 8);
    assert_eq!(config.anonymize.enabled_patterns, PiiCategory::ALL.to_vec());

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[anonymize]
default_salt = "tenant-a"
enabled_patterns = ["email", "uuid"]

[observability]
json_logs = false
"#;
    let config = VeilConfig::from_toml(toml).unwrap();
    assert_eq!(config.anonymize.default_salt, "tenant-a");
    assert_eq!(config.anonymize.digest_length, 8);
    assert!(config.anonymize.is_enabled(PiiCategory::Email));
    assert!(!config.anonymize.is_enabled(PiiCategory::Phone));
    assert!(!config.observability.json_logs);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_narrow_digest() {
    let err = VeilConfig::from_toml("[anonymize]\ndigest_length = 4").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "anonymize.digest_length"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_empty_pattern_set() {
    let err = VeilConfig::from_toml("[anonymize]\nenabled_patterns = []").unwrap_err();
    assert!(err.to_string().contains("enabled_patterns"));
}

#[test]
fn config_rejects_unknown_log_level() {
    let err = VeilConfig::from_toml("[observability]\nlog_level = \"loud\"").unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn config_rejects_unknown_pattern_name() {
    let err = VeilConfig::from_toml("[anonymize]\nenabled_patterns = [\"passport\"]").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_take_priority_and_ignore_bad_values() {
    let env: HashMap<&str, &str> = [
        ("VEIL_DEFAULT_SALT", "from-env"),
        ("VEIL_DIGEST_LENGTH", "not-a-number"),
        ("VEIL_LOG_LEVEL", "DEBUG"),
        ("VEIL_LOG_JSON", "false"),
    ]
    .into_iter()
    .collect();

    let mut config = VeilConfig::from_toml("[anonymize]\ndigest_length = 12").unwrap();
    config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.anonymize.default_salt, "from-env");
    assert_eq!(config.anonymize.digest_length, 12);
    assert_eq!(config.observability.log_level, "debug");
    assert!(!config.observability.json_logs);
    VeilConfig::validate(&config).unwrap();
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("veil.toml"),
        "[anonymize]\ndigest_length = 16\n",
    )
    .unwrap();

    let config = VeilConfig::load(dir.path()).unwrap();
    assert_eq!(config.anonymize.digest_length, 16);
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = VeilConfig::load(dir.path()).unwrap();
    assert_eq!(config.anonymize.enabled_patterns.len(), 6);
}

#[test]
fn load_reports_invalid_toml_with_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("veil.toml"), "[anonymize\n").unwrap();

    let err = VeilConfig::load(dir.path()).unwrap_err();
    match err {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("veil.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

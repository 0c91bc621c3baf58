// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the configuration system.

use nat_config::diagnostic::ConfigError;
use nat_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_nat_config() {
    let toml = r#"
[logging]
log_level = "debug"

[remote]
enabled = true
url = "https://project.supabase.co/functions/v1/classify-risk"
anon_key = "anon-abc"
timeout_secs = 5
max_retries = 0

[responder]
default_user_name = "mamãe"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.log_level, "debug");
    assert!(config.remote.enabled);
    assert_eq!(
        config.remote.url.as_deref(),
        Some("https://project.supabase.co/functions/v1/classify-risk")
    );
    assert_eq!(config.remote.anon_key.as_deref(), Some("anon-abc"));
    assert_eq!(config.remote.timeout_secs, 5);
    assert_eq!(config.remote.max_retries, 0);
    assert_eq!(config.responder.default_user_name, "mamãe");
}

/// Empty TOML produces the local-only defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should validate");
    assert!(!config.remote.enabled);
    assert_eq!(config.remote.timeout_secs, 10);
    assert_eq!(config.responder.default_user_name, "querida");
}

/// A typo in [remote] becomes an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_in_remote_suggests_correction() {
    let toml = r#"
[remote]
anon_kye = "abc"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "anon_kye");
            assert_eq!(suggestion.as_deref(), Some("anon_key"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level section is rejected.
#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[telemetry]
enabled = true
"#;
    assert!(load_config_from_str(toml).is_err());
}

/// Wrong value type becomes an InvalidType diagnostic naming the key path.
#[test]
fn wrong_type_produces_invalid_type_error() {
    let toml = r#"
[remote]
timeout_secs = "ten"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::InvalidType { key, .. } if key.contains("timeout_secs")
    )));
}

/// Semantic validation runs after successful deserialization.
#[test]
fn enabled_remote_without_url_fails_validation() {
    let toml = r#"
[remote]
enabled = true
"#;

    let errors = load_and_validate_str(toml).expect_err("should fail validation");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::Validation { message } if message.contains("remote.url")
    )));
}

// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Strategist configuration system.

use strategist_config::diagnostic::{suggest_key, ConfigError};
use strategist_config::model::StrategistConfig;
use strategist_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_strategist_config() {
    let toml = r#"
[app]
log_level = "debug"
dashboard_recent_limit = 8

[server]
host = "0.0.0.0"
port = 9000

[storage]
database_path = "/tmp/test.db"
wal_mode = false

[anthropic]
api_key = "sk-ant-123"
model = "claude-sonnet-4-20250514"
max_tokens = 1500
request_timeout_secs = 30
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.log_level, "debug");
    assert_eq!(config.app.dashboard_recent_limit, 8);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.storage.database_path, "/tmp/test.db");
    assert!(!config.storage.wal_mode);
    assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-ant-123"));
    assert_eq!(config.anthropic.max_tokens, 1500);
    assert_eq!(config.anthropic.request_timeout_secs, 30);
}

/// Missing sections use compiled defaults without error.
#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.app.log_level, "info");
    assert_eq!(config.app.dashboard_recent_limit, 5);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8700);
    assert!(config.storage.wal_mode);
    assert!(config.anthropic.api_key.is_none());
    assert_eq!(config.anthropic.model, "claude-sonnet-4-20250514");
    assert_eq!(config.anthropic.api_version, "2023-06-01");
    assert_eq!(config.anthropic.request_timeout_secs, 60);
}

/// Unknown field in a section is rejected by deny_unknown_fields.
#[test]
fn unknown_field_in_server_produces_error() {
    let toml = r#"
[server]
hsot = "0.0.0.0"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("hsot"),
        "error should mention the bad key, got: {err_str}"
    );
}

/// Unknown top-level section is rejected.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[metrics]
enabled = true
"#;

    let err = load_config_from_str(toml).expect_err("unknown section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("metrics"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation override (what the STRATEGIST_ env mapping produces)
/// overrides TOML values.
#[test]
fn dotted_override_beats_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[server]
port = 8700
"#;

    let config: StrategistConfig = Figment::new()
        .merge(Serialized::defaults(StrategistConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("server.port", 9999))
        .extract()
        .expect("should merge override");

    assert_eq!(config.server.port, 9999);
}

/// `anthropic.api_key` maps through dot notation, not `anthropic.api.key`.
#[test]
fn api_key_maps_to_single_key() {
    use figment::{providers::Serialized, Figment};

    let config: StrategistConfig = Figment::new()
        .merge(Serialized::defaults(StrategistConfig::default()))
        .merge(("anthropic.api_key", "from-env"))
        .extract()
        .expect("should set api_key via dot notation");

    assert_eq!(config.anthropic.api_key.as_deref(), Some("from-env"));
}

/// Missing config files are silently skipped (Figment's Toml::file behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: StrategistConfig = Figment::new()
        .merge(Serialized::defaults(StrategistConfig::default()))
        .merge(Toml::file("/nonexistent/path/strategist.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.server.host, "127.0.0.1");
}

/// Typo in a section key yields an UnknownKey diagnostic with a suggestion.
#[test]
fn diagnostic_suggests_correction_for_typo() {
    let toml = r#"
[storage]
databse_path = "/tmp/x.db"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_suggestion = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys } if {
            key == "databse_path"
                && suggestion.as_deref() == Some("database_path")
                && valid_keys.contains("wal_mode")
        })
    });
    assert!(
        has_suggestion,
        "should suggest database_path for databse_path, got: {errors:?}"
    );
}

/// Invalid type (string where number expected) produces a clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[server]
port = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("port"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError renders through miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "hsot".to_string(),
        suggestion: Some("host".to_string()),
        valid_keys: "host, port".to_string(),
    };

    let help = error.help().expect("should have help text").to_string();
    assert!(help.contains("did you mean `host`"), "got: {help}");

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("hsot"), "rendered report should mention the key");
}

/// Validation catches a zero request timeout.
#[test]
fn validation_catches_zero_timeout() {
    let toml = r#"
[anthropic]
request_timeout_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero timeout should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("request_timeout_secs"))
    });
    assert!(has_validation_error, "should flag request_timeout_secs");
}

/// Resolved config serializes back to TOML (used by `strategist config`).
#[test]
fn config_serializes_to_toml() {
    let config = StrategistConfig::default();
    let rendered = toml::to_string_pretty(&config).expect("should serialize");
    assert!(rendered.contains("[server]"));
    assert!(rendered.contains("[storage]"));
}

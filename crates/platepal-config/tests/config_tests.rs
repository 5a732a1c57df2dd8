// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the PlatePal configuration system.

use platepal_config::{PlatePalConfig, load_config_from_path, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[api]
base_url = "https://api.platepal.example/api"
request_timeout_secs = 10

[chat]
ws_base_url = "wss://api.platepal.example/ws"
reconnect_initial_delay_ms = 1000
reconnect_max_delay_ms = 8000
reconnect_max_attempts = 4
message_buffer_cap = 100

[session]
expiry_check_interval_secs = 15
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.api.base_url, "https://api.platepal.example/api");
    assert_eq!(config.api.request_timeout_secs, 10);
    assert_eq!(config.chat.ws_base_url, "wss://api.platepal.example/ws");
    assert_eq!(config.chat.reconnect_initial_delay_ms, 1000);
    assert_eq!(config.chat.reconnect_max_delay_ms, 8000);
    assert_eq!(config.chat.reconnect_max_attempts, 4);
    assert_eq!(config.chat.message_buffer_cap, 100);
    assert_eq!(config.session.expiry_check_interval_secs, 15);
}

/// Missing sections fall back to compiled defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.request_timeout_secs, 30);
    assert_eq!(config.chat.ws_base_url, "ws://localhost:8080/ws");
    assert_eq!(config.chat.reconnect_initial_delay_ms, 3000);
    assert_eq!(config.chat.reconnect_max_delay_ms, 30_000);
    assert_eq!(config.chat.reconnect_max_attempts, 10);
    assert_eq!(config.chat.message_buffer_cap, 500);
    assert_eq!(config.session.expiry_check_interval_secs, 30);
}

/// Unknown keys are rejected rather than silently ignored.
#[test]
fn unknown_field_produces_error() {
    let toml = r#"
[api]
base_ulr = "http://typo.example"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("base_ulr"),
        "error should mention the unknown field, got: {err_str}"
    );
}

/// Unknown top-level sections are rejected too.
#[test]
fn unknown_section_produces_error() {
    let toml = r#"
[metrics]
enabled = true
"#;

    assert!(load_config_from_str(toml).is_err());
}

/// `PLATEPAL_`-prefixed environment variables override file values, with
/// underscore-containing keys mapped to the right section.
#[test]
fn env_vars_override_file_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "platepal.toml",
            r#"
[api]
base_url = "http://from-file.example/api"

[chat]
reconnect_max_attempts = 2
"#,
        )?;
        jail.set_env("PLATEPAL_API_BASE_URL", "http://from-env.example/api");
        jail.set_env("PLATEPAL_CHAT_RECONNECT_MAX_ATTEMPTS", "7");

        let config: PlatePalConfig =
            load_config_from_path(std::path::Path::new("platepal.toml"))
                .expect("config should load");
        assert_eq!(config.api.base_url, "http://from-env.example/api");
        assert_eq!(config.chat.reconnect_max_attempts, 7);
        Ok(())
    });
}

/// Defaults survive partial section overrides.
#[test]
fn partial_section_keeps_other_defaults() {
    let toml = r#"
[chat]
message_buffer_cap = 50
"#;

    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.chat.message_buffer_cap, 50);
    assert_eq!(config.chat.reconnect_initial_delay_ms, 3000);
}

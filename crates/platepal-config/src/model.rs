// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the PlatePal client core.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. Every field has a compiled default so an empty
//! config file is valid.

use serde::{Deserialize, Serialize};

/// Top-level PlatePal configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides via the `PLATEPAL_` prefix.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlatePalConfig {
    /// REST API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Chat channel and reconnect settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Session manager settings.
    #[serde(default)]
    pub session: SessionConfig,
}

/// REST API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the PlatePal REST API.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Chat channel configuration.
///
/// The reconnect fields parameterize the exponential-backoff policy applied
/// after an abnormal socket close. The first retry fires after
/// `reconnect_initial_delay_ms`; subsequent delays double up to
/// `reconnect_max_delay_ms`, and attempts stop at `reconnect_max_attempts`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Base URL of the chat WebSocket endpoint, e.g. `ws://host/ws`.
    #[serde(default = "default_ws_base_url")]
    pub ws_base_url: String,

    /// Delay before the first reconnect attempt, in milliseconds.
    #[serde(default = "default_reconnect_initial_delay_ms")]
    pub reconnect_initial_delay_ms: u64,

    /// Cap on the backoff delay, in milliseconds.
    #[serde(default = "default_reconnect_max_delay_ms")]
    pub reconnect_max_delay_ms: u64,

    /// Maximum number of reconnect attempts before the channel closes.
    #[serde(default = "default_reconnect_max_attempts")]
    pub reconnect_max_attempts: u32,

    /// Cap on the in-memory message log; oldest entries are evicted.
    #[serde(default = "default_message_buffer_cap")]
    pub message_buffer_cap: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            ws_base_url: default_ws_base_url(),
            reconnect_initial_delay_ms: default_reconnect_initial_delay_ms(),
            reconnect_max_delay_ms: default_reconnect_max_delay_ms(),
            reconnect_max_attempts: default_reconnect_max_attempts(),
            message_buffer_cap: default_message_buffer_cap(),
        }
    }
}

fn default_ws_base_url() -> String {
    "ws://localhost:8080/ws".to_string()
}

fn default_reconnect_initial_delay_ms() -> u64 {
    3000
}

fn default_reconnect_max_delay_ms() -> u64 {
    30_000
}

fn default_reconnect_max_attempts() -> u32 {
    10
}

fn default_message_buffer_cap() -> usize {
    500
}

/// Session manager configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Interval between token-expiry checks, in seconds.
    #[serde(default = "default_expiry_check_interval_secs")]
    pub expiry_check_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_check_interval_secs: default_expiry_check_interval_secs(),
        }
    }
}

fn default_expiry_check_interval_secs() -> u64 {
    30
}

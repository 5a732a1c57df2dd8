// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./platepal.toml` > `~/.config/platepal/platepal.toml`
//! > `/etc/platepal/platepal.toml` with environment variable overrides via the
//! `PLATEPAL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::PlatePalConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/platepal/platepal.toml` (system-wide)
/// 3. `~/.config/platepal/platepal.toml` (user XDG config)
/// 4. `./platepal.toml` (local directory)
/// 5. `PLATEPAL_*` environment variables
pub fn load_config() -> Result<PlatePalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlatePalConfig::default()))
        .merge(Toml::file("/etc/platepal/platepal.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("platepal/platepal.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("platepal.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<PlatePalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlatePalConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlatePalConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlatePalConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PLATEPAL_API_BASE_URL` must map to
/// `api.base_url`, not `api.base.url`.
fn env_provider() -> Env {
    Env::prefixed("PLATEPAL_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("api_", "api.", 1)
            .replacen("chat_", "chat.", 1)
            .replacen("session_", "session.", 1);
        mapped.into()
    })
}

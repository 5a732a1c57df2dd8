// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the PlatePal client core.

use thiserror::Error;

/// The primary error type used across all PlatePal crates.
///
/// Variants follow the application's error taxonomy: connectivity failures,
/// authorization failures (which force a logout at the session layer),
/// business-rule rejections surfaced inline, and malformed server payloads
/// which are dropped rather than shown to the user.
#[derive(Debug, Error)]
pub enum PlatePalError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Network or connectivity failures on a REST call.
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server rejected the bearer token (HTTP 401). Forces a logout.
    #[error("unauthorized: session is no longer valid")]
    Unauthorized,

    /// A validation or business rejection (e.g. a premium-feature 403).
    /// The message is suitable for inline display.
    #[error("{message}")]
    BusinessRule { message: String },

    /// A server payload that could not be decoded. Logged, never surfaced.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// Chat channel errors (connection failure, send while disconnected).
    #[error("chat channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Session storage errors.
    #[error("session storage error: {0}")]
    Storage(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

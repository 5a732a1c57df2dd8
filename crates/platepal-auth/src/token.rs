// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side JWT expiry decoding.
//!
//! The payload is base64url-decoded without any signature verification: this
//! is a UI-only convenience check that hides expired sessions sooner, not a
//! security boundary. The server independently rejects expired tokens with a
//! 401, which is what actually forces a logout.
//!
//! Anything that fails to decode is treated as *not expired* (fail open).

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Claims the client cares about. Unknown claims are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Standard JWT subject.
    #[serde(default)]
    pub sub: Option<String>,

    /// Standard JWT expiry (Unix timestamp, seconds).
    #[serde(default)]
    pub exp: Option<i64>,

    /// Issued-at (Unix timestamp, seconds).
    #[serde(default)]
    pub iat: Option<i64>,
}

/// Decode the payload segment of a JWT-shaped token.
///
/// Returns `None` for anything that is not `header.payload.signature` with a
/// base64url JSON payload.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether the token's `exp` claim is at or past `now`.
///
/// A missing `exp` claim or a decode failure reports *not expired*.
pub fn is_token_expired_at(token: &str, now: DateTime<Utc>) -> bool {
    match decode_claims(token).and_then(|claims| claims.exp) {
        Some(exp) => exp <= now.timestamp(),
        None => false,
    }
}

/// [`is_token_expired_at`] against the current time.
pub fn is_token_expired(token: &str) -> bool {
    is_token_expired_at(token, Utc::now())
}

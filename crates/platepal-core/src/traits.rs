// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the session manager and its consumers.
//!
//! The session token is the only cross-component shared mutable value. It is
//! written by the session manager and read everywhere else through
//! [`TokenSource`], so no consumer holds ambient global state.

use async_trait::async_trait;

use crate::error::PlatePalError;
use crate::types::Session;

/// Read access to the current bearer token.
///
/// REST clients attach the token to authenticated requests; `None` means the
/// caller is anonymous and the request goes out without an `Authorization`
/// header.
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Durable medium for the current session.
///
/// The analogue of browser session storage: process-lifetime persistence,
/// cleared on logout. Implementations must hold at most one session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), PlatePalError>;

    /// Load the persisted session, if any.
    async fn load(&self) -> Result<Option<Session>, PlatePalError>;

    /// Remove the persisted session.
    async fn clear(&self) -> Result<(), PlatePalError>;
}

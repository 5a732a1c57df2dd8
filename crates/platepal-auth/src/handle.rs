// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared read handle for the current session.
//!
//! The one cross-component mutable value: written by the session manager,
//! read lock-free by every REST client through [`TokenSource`]. Constructed
//! first so the API client and the manager can share it.

use arc_swap::ArcSwapOption;
use std::sync::Arc;

use platepal_core::{Session, TokenSource};

/// Lock-free snapshot cell holding the current session.
#[derive(Default)]
pub struct SessionHandle {
    current: ArcSwapOption<Session>,
}

impl SessionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if authenticated.
    pub fn snapshot(&self) -> Option<Arc<Session>> {
        self.current.load_full()
    }

    pub(crate) fn set(&self, session: Session) {
        self.current.store(Some(Arc::new(session)));
    }

    pub(crate) fn clear(&self) {
        self.current.store(None);
    }
}

impl TokenSource for SessionHandle {
    fn bearer_token(&self) -> Option<String> {
        self.snapshot().map(|session| session.token.clone())
    }
}

impl std::fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("SessionHandle")
            .field("user_id", &snapshot.as_ref().map(|s| s.user.user_id.0.clone()))
            .field("token", &snapshot.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

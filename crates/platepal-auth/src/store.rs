// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory session store.
//!
//! The default [`SessionStore`]: process-lifetime persistence matching the
//! original's browser session storage, which is cleared on logout or tab
//! close. Nothing else is durably stored on the client.

use async_trait::async_trait;
use tokio::sync::RwLock;

use platepal_core::{PlatePalError, Session, SessionStore};

/// Holds at most one session for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), PlatePalError> {
        *self.inner.write().await = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>, PlatePalError> {
        Ok(self.inner.read().await.clone())
    }

    async fn clear(&self) -> Result<(), PlatePalError> {
        *self.inner.write().await = None;
        Ok(())
    }
}

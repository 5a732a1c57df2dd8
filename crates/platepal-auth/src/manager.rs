// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session lifecycle management.
//!
//! The session FSM has two states: Anonymous and Authenticated. Login moves
//! it forward; an explicit logout, a detected token expiry, or a server 401
//! moves it back. Transitions are published on a watch channel — the
//! original forces navigation to the entry page on logout; consumers here
//! observe the `Anonymous` transition instead.
//!
//! The manager is an explicitly constructed value passed to its consumers;
//! there is no ambient global session.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use platepal_api::ApiClient;
use platepal_api::resources::users;
use platepal_core::{PlatePalError, Session, SessionStore, UserProfile};

use crate::handle::SessionHandle;
use crate::token;

/// States of the session FSM. No intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated,
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthState::Anonymous => write!(f, "anonymous"),
            AuthState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Owns the session lifecycle: login, logout, profile refresh, and the
/// periodic expiry watcher.
pub struct SessionManager {
    handle: Arc<SessionHandle>,
    store: Arc<dyn SessionStore>,
    api: ApiClient,
    state_tx: watch::Sender<AuthState>,
}

impl SessionManager {
    /// Create a manager around a shared [`SessionHandle`].
    ///
    /// The handle is created first and passed to both the [`ApiClient`] (as
    /// its token source) and the manager, so REST calls always see the
    /// current token:
    ///
    /// ```ignore
    /// let handle = Arc::new(SessionHandle::new());
    /// let api = ApiClient::new(&config.api, handle.clone())?;
    /// let manager = SessionManager::new(handle, Arc::new(MemorySessionStore::new()), api);
    /// ```
    pub fn new(
        handle: Arc<SessionHandle>,
        store: Arc<dyn SessionStore>,
        api: ApiClient,
    ) -> Self {
        let (state_tx, _) = watch::channel(AuthState::Anonymous);
        Self {
            handle,
            store,
            api,
            state_tx,
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> AuthState {
        *self.state_tx.borrow()
    }

    /// A receiver for observing login/logout transitions.
    pub fn watch_state(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    /// The current session snapshot, if authenticated.
    pub fn current_session(&self) -> Option<Arc<Session>> {
        self.handle.snapshot()
    }

    /// Store the login response in memory and in the session store.
    pub async fn login(&self, user: UserProfile, token: String) -> Result<(), PlatePalError> {
        let session = Session {
            user,
            token,
            created_at: Utc::now(),
        };
        self.store.save(&session).await?;
        let user_id = session.user.user_id.0.clone();
        self.handle.set(session);
        self.state_tx.send_replace(AuthState::Authenticated);
        info!(user_id = user_id.as_str(), "logged in");
        Ok(())
    }

    /// Clear the session everywhere and publish the Anonymous transition.
    pub async fn logout(&self) -> Result<(), PlatePalError> {
        self.handle.clear();
        self.store.clear().await?;
        self.state_tx.send_replace(AuthState::Anonymous);
        info!("logged out");
        Ok(())
    }

    /// Restore a persisted session on startup.
    ///
    /// An expired persisted token is discarded rather than restored, keeping
    /// the invariant that a held session is never expired. Returns whether a
    /// session was restored.
    pub async fn restore(&self) -> Result<bool, PlatePalError> {
        match self.store.load().await? {
            Some(session) if !token::is_token_expired(&session.token) => {
                self.handle.set(session);
                self.state_tx.send_replace(AuthState::Authenticated);
                Ok(true)
            }
            Some(_) => {
                debug!("discarding expired persisted session");
                self.store.clear().await?;
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Whether the held token's `exp` claim has passed.
    ///
    /// False when anonymous: there is nothing to expire.
    pub fn is_token_expired(&self) -> bool {
        self.handle
            .snapshot()
            .is_some_and(|session| token::is_token_expired(&session.token))
    }

    /// Re-fetch the current user's profile.
    ///
    /// Returns `Ok(None)` when anonymous. A detected expiry or a server 401
    /// forces a logout and surfaces as [`PlatePalError::Unauthorized`].
    pub async fn refresh_user(&self) -> Result<Option<UserProfile>, PlatePalError> {
        let Some(session) = self.handle.snapshot() else {
            return Ok(None);
        };

        if token::is_token_expired(&session.token) {
            warn!("token expired, forcing logout");
            self.logout().await?;
            return Err(PlatePalError::Unauthorized);
        }

        match users::current_user(&self.api).await {
            Ok(profile) => {
                let updated = Session {
                    user: profile.clone(),
                    token: session.token.clone(),
                    created_at: session.created_at,
                };
                self.store.save(&updated).await?;
                self.handle.set(updated);
                Ok(Some(profile))
            }
            Err(PlatePalError::Unauthorized) => {
                warn!("server rejected token, forcing logout");
                self.logout().await?;
                Err(PlatePalError::Unauthorized)
            }
            Err(e) => Err(e),
        }
    }

    /// Spawn the periodic expiry watcher.
    ///
    /// Checks the held token every `interval` and logs out when it has
    /// expired. The task stops when `cancel` fires (component teardown).
    pub fn spawn_expiry_watcher(
        self: Arc<Self>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        let manager = self;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        debug!("expiry watcher stopped");
                        return;
                    }
                    _ = ticker.tick() => {
                        if manager.is_token_expired() {
                            warn!("session token expired, logging out");
                            if let Err(e) = manager.logout().await {
                                warn!(error = %e, "logout after expiry failed");
                            }
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_state_display() {
        assert_eq!(AuthState::Anonymous.to_string(), "anonymous");
        assert_eq!(AuthState::Authenticated.to_string(), "authenticated");
    }

    #[test]
    fn auth_state_equality() {
        assert_eq!(AuthState::Anonymous, AuthState::Anonymous);
        assert_ne!(AuthState::Anonymous, AuthState::Authenticated);
    }
}

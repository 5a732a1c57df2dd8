// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session management for the PlatePal client.
//!
//! Holds the current user and bearer token, decodes the JWT expiry claim for
//! a client-side convenience check, and forces a logout on expiry or a
//! server 401. The shared [`SessionHandle`] feeds the token to REST clients
//! through the `TokenSource` seam.

pub mod handle;
pub mod manager;
pub mod store;
pub mod token;

pub use handle::SessionHandle;
pub use manager::{AuthState, SessionManager};
pub use store::MemorySessionStore;
pub use token::{Claims, decode_claims, is_token_expired, is_token_expired_at};

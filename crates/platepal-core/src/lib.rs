// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the PlatePal client crates.
//!
//! Provides the shared domain types, the workspace-wide error taxonomy, and
//! the trait seams (`TokenSource`, `SessionStore`) that keep the session
//! token explicitly passed rather than ambient.

pub mod error;
pub mod traits;
pub mod types;

pub use error::PlatePalError;
pub use traits::{SessionStore, TokenSource};
pub use types::{
    ChatMessage, ChefId, LineItem, MenuItemId, MessageType, OrderId, OrderStatus, Role,
    Session, UserId, UserProfile,
};

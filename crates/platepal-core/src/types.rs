// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the PlatePal client crates.
//!
//! Wire-facing structs use `camelCase` field names to match the backend's
//! JSON bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a user (student, chef, or admin).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Unique identifier for an order. Also the chat session id for that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

/// Unique identifier for a chef.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChefId(pub String);

/// Unique identifier for a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub String);

/// Role carried by every authenticated user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Chef,
    Admin,
}

/// Lifecycle status of a placed order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether the order chat is available in this status.
    ///
    /// Chat messages may only be exchanged while the order is active:
    /// CONFIRMED, PREPARING, or READY.
    pub fn chat_active(self) -> bool {
        matches!(
            self,
            OrderStatus::Confirmed | OrderStatus::Preparing | OrderStatus::Ready
        )
    }
}

/// The authenticated user's profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: String,
    pub role: Role,
    /// Whether the account passed verification (chefs must be verified).
    pub verified: bool,
}

/// An authenticated session: the current user plus their bearer token.
///
/// The token is an opaque bearer string with an embedded JWT expiry claim.
/// A session held in memory is kept non-expired by the periodic expiry
/// watcher in `platepal-auth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

/// One line of a cart or placed order. Immutable once the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub menu_item_id: MenuItemId,
    pub chef_id: ChefId,
    /// Unit price in currency units.
    pub unit_price: f64,
    pub quantity: u32,
}

/// Who authored a chat message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    User,
    System,
}

/// A single chat message exchanged over the per-order socket.
///
/// `session_id` equals the order id. Messages are immutable once created
/// and displayed in socket-arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub session_id: OrderId,
    pub sender_user_id: UserId,
    pub sender_name: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub message_type: MessageType,
}

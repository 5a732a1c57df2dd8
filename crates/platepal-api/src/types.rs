// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire DTOs for the PlatePal REST resources.
//!
//! Field names are `camelCase` on the wire to match the backend's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use platepal_core::{ChatMessage, ChefId, LineItem, MenuItemId, OrderId, OrderStatus, UserId};

/// A placed order. One backend record per contributing chef of a checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub student_id: UserId,
    pub chef_id: ChefId,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
    pub placed_at: DateTime<Utc>,
}

/// A dish offered by a chef.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub chef_id: ChefId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub available: bool,
}

/// A home chef's public listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chef {
    pub id: ChefId,
    pub name: String,
    pub kitchen_name: String,
    pub verified: bool,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// A student's rating of a delivered order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub order_id: OrderId,
    pub stars: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Request body for rating an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateOrderRequest {
    pub stars: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    Free,
    Gold,
}

/// The current user's subscription state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: SubscriptionPlan,
    pub active: bool,
    #[serde(default)]
    pub renews_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Whether this subscription grants Gold benefits (5% discount, waived
    /// platform fee) right now.
    pub fn gold_active(&self) -> bool {
        self.active && self.plan == SubscriptionPlan::Gold
    }
}

/// Request body for placing a checkout.
///
/// The backend splits a multi-chef cart into one order per chef and returns
/// every created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub line_items: Vec<LineItem>,
    pub has_active_subscription: bool,
}

/// Whether chat is currently enabled for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEnabled {
    pub enabled: bool,
}

/// One page of persisted chat history for an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHistoryPage {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Error body returned by the backend on business rejections.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_gold_active_requires_both_flags() {
        let gold = Subscription {
            plan: SubscriptionPlan::Gold,
            active: true,
            renews_at: None,
        };
        assert!(gold.gold_active());

        let lapsed = Subscription {
            plan: SubscriptionPlan::Gold,
            active: false,
            renews_at: None,
        };
        assert!(!lapsed.gold_active());

        let free = Subscription {
            plan: SubscriptionPlan::Free,
            active: true,
            renews_at: None,
        };
        assert!(!free.gold_active());
    }

    #[test]
    fn order_deserializes_camel_case() {
        let json = r#"{
            "id": "order-1",
            "studentId": "u-1",
            "chefId": "chef-1",
            "status": "CONFIRMED",
            "lineItems": [],
            "placedAt": "2026-03-01T10:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert!(order.status.chat_active());
    }
}

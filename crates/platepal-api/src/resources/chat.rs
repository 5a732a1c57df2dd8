// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat precondition and history operations.
//!
//! The live message stream is `platepal-chat`'s concern; this module covers
//! the REST side: the chat-enabled precondition checked before opening a
//! socket, and paged history for conversation restore.

use platepal_core::{OrderId, PlatePalError};

use crate::client::ApiClient;
use crate::types::{ChatEnabled, ChatHistoryPage};

/// Whether the backend currently allows chat for this order.
///
/// True only while the order is in an active status (CONFIRMED, PREPARING,
/// READY). Checked before a socket is opened.
pub async fn chat_enabled(client: &ApiClient, order: &OrderId) -> Result<bool, PlatePalError> {
    let response: ChatEnabled = client
        .get_json(&format!("/chat/order/{}/enabled", order.0))
        .await?;
    Ok(response.enabled)
}

/// Fetch one page of persisted chat history for an order.
///
/// Pass the previous page's `next_cursor` to continue; `None` starts from
/// the most recent messages.
pub async fn chat_history(
    client: &ApiClient,
    order: &OrderId,
    cursor: Option<&str>,
) -> Result<ChatHistoryPage, PlatePalError> {
    let path = match cursor {
        Some(cursor) => format!("/chat/order/{}/history?cursor={cursor}", order.0),
        None => format!("/chat/order/{}/history", order.0),
    };
    client.get_json(&path).await
}

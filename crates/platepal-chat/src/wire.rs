// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire format for the chat socket.
//!
//! Outbound frames are JSON `{"orderId", "userId", "message"}`; inbound
//! frames are full chat-message objects. Malformed inbound frames are
//! dropped by the channel, and the server's system welcome is filtered
//! from the visible log.

use serde::{Deserialize, Serialize};

use platepal_core::{ChatMessage, MessageType, OrderId, PlatePalError, UserId};

/// Body prefix of the system greeting the backend sends on join. Filtered
/// from the visible log rather than displayed.
pub const SYSTEM_WELCOME_PREFIX: &str = "Welcome to the order chat";

/// An outbound chat frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundFrame {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub message: String,
}

/// Serialize an outbound frame.
pub fn encode_outbound(
    order_id: &OrderId,
    user_id: &UserId,
    message: &str,
) -> Result<String, PlatePalError> {
    let frame = OutboundFrame {
        order_id: order_id.clone(),
        user_id: user_id.clone(),
        message: message.to_string(),
    };
    serde_json::to_string(&frame)
        .map_err(|e| PlatePalError::Internal(format!("failed to encode chat frame: {e}")))
}

/// Parse an inbound frame into a chat message.
pub fn parse_inbound(text: &str) -> Result<ChatMessage, PlatePalError> {
    serde_json::from_str(text)
        .map_err(|e| PlatePalError::Payload(format!("failed to decode chat frame: {e}")))
}

/// Whether this message is the server's join greeting.
pub fn is_system_welcome(message: &ChatMessage) -> bool {
    message.message_type == MessageType::System
        && message.body.starts_with(SYSTEM_WELCOME_PREFIX)
}

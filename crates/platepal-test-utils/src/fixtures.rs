// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token and chat-message fixtures.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;

use platepal_core::{ChatMessage, MessageType, OrderId, UserId};

/// Build an unsigned JWT-shaped token with the given `exp` claim.
///
/// The session layer only base64url-decodes the payload, so the signature
/// segment is an arbitrary placeholder.
pub fn unsigned_jwt(exp: Option<i64>) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let mut claims = serde_json::json!({"sub": "test-user"});
    if let Some(exp) = exp {
        claims["exp"] = serde_json::json!(exp);
    }
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).expect("claims serialize"));
    format!("{header}.{payload}.fixture-signature")
}

/// A token whose `exp` is `offset_secs` from now (negative = already expired).
pub fn jwt_expiring_in(offset_secs: i64) -> String {
    unsigned_jwt(Some(Utc::now().timestamp() + offset_secs))
}

/// Build a user chat message frame for an order, serialized as the backend
/// sends it.
pub fn user_message_frame(order: &str, sender: &str, name: &str, body: &str) -> String {
    message_frame(order, sender, name, body, MessageType::User)
}

/// Build a system chat message frame.
pub fn system_message_frame(order: &str, body: &str) -> String {
    message_frame(order, "system", "PlatePal", body, MessageType::System)
}

fn message_frame(
    order: &str,
    sender: &str,
    name: &str,
    body: &str,
    message_type: MessageType,
) -> String {
    let msg = ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        session_id: OrderId(order.to_string()),
        sender_user_id: UserId(sender.to_string()),
        sender_name: name.to_string(),
        body: body.to_string(),
        sent_at: Utc::now(),
        message_type,
    };
    serde_json::to_string(&msg).expect("chat message serialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_jwt_has_three_segments() {
        let token = unsigned_jwt(Some(1_900_000_000));
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn payload_decodes_back_to_claims() {
        let token = unsigned_jwt(Some(1234));
        let payload = token.split('.').nth(1).unwrap();
        let bytes = URL_SAFE_NO_PAD.decode(payload).unwrap();
        let claims: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(claims["exp"], 1234);
    }

    #[test]
    fn user_frame_is_valid_chat_message() {
        let frame = user_message_frame("order-1", "u-1", "Priya", "hello");
        let msg: ChatMessage = serde_json::from_str(&frame).unwrap();
        assert_eq!(msg.session_id, OrderId("order-1".into()));
        assert_eq!(msg.message_type, MessageType::User);
    }
}

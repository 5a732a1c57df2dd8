// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the chat channel against an in-process WebSocket
//! server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio::sync::Semaphore;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;

use platepal_chat::{ChannelState, ChatChannel, Sleeper};
use platepal_config::ChatConfig;
use platepal_core::{OrderId, UserId};
use platepal_test_utils::{MockChatServer, system_message_frame, user_message_frame};

fn chat_config(server: &MockChatServer) -> ChatConfig {
    ChatConfig {
        ws_base_url: server.ws_base_url(),
        ..ChatConfig::default()
    }
}

/// A sleeper that records each requested delay and returns immediately.
fn recording_sleeper() -> (Sleeper, Arc<Mutex<Vec<Duration>>>) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let log = recorded.clone();
    let sleeper: Sleeper = Arc::new(move |delay| {
        log.lock().unwrap().push(delay);
        Box::pin(std::future::ready(()))
    });
    (sleeper, recorded)
}

/// A sleeper that records delays and then blocks until the test releases a
/// permit, so the test controls when each reconnect attempt proceeds.
fn gated_sleeper() -> (Sleeper, Arc<Mutex<Vec<Duration>>>, Arc<Semaphore>) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let gate = Arc::new(Semaphore::new(0));
    let log = recorded.clone();
    let sem = gate.clone();
    let sleeper: Sleeper = Arc::new(move |delay| {
        log.lock().unwrap().push(delay);
        let sem = sem.clone();
        Box::pin(async move {
            if let Ok(permit) = sem.acquire().await {
                permit.forget();
            }
        })
    });
    (sleeper, recorded, gate)
}

async fn open_channel(config: &ChatConfig, sleeper: Sleeper) -> ChatChannel {
    ChatChannel::open_unchecked(
        config,
        OrderId("order-1".into()),
        UserId("u-1".into()),
        sleeper,
    )
    .await
    .expect("channel should connect")
}

#[tokio::test]
async fn messages_arrive_in_order_and_welcome_is_filtered() {
    let server = MockChatServer::start(|mut socket, _index| async move {
        let frames = [
            system_message_frame("order-1", "Welcome to the order chat for order-1"),
            user_message_frame("order-1", "chef-9", "Marco", "Starting your order now"),
            user_message_frame("order-1", "u-1", "Priya", "Thank you!"),
        ];
        for frame in frames {
            socket.send(Message::Text(frame.into())).await.unwrap();
        }
        while socket.next().await.is_some() {}
    })
    .await;

    let (sleeper, _) = recording_sleeper();
    let channel = open_channel(&chat_config(&server), sleeper).await;

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while channel.messages().await.len() < 2 {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for messages"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let bodies: Vec<String> = channel
        .messages()
        .await
        .into_iter()
        .map(|m| m.body)
        .collect();
    assert_eq!(bodies, vec!["Starting your order now", "Thank you!"]);

    channel.close().await;
}

#[tokio::test]
async fn malformed_frames_are_dropped_silently() {
    let server = MockChatServer::start(|mut socket, _index| async move {
        socket
            .send(Message::Text("{this is not json".into()))
            .await
            .unwrap();
        socket
            .send(Message::Text(
                user_message_frame("order-1", "chef-9", "Marco", "Still here").into(),
            ))
            .await
            .unwrap();
        while socket.next().await.is_some() {}
    })
    .await;

    let (sleeper, _) = recording_sleeper();
    let channel = open_channel(&chat_config(&server), sleeper).await;

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while channel.messages().await.is_empty() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for the valid message"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let messages = channel.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body, "Still here");

    channel.close().await;
}

#[tokio::test]
async fn send_transmits_order_user_and_message() {
    // The server echoes each outbound frame's fields back as a chat message,
    // so the assertions below cover the wire shape end to end.
    let server = MockChatServer::start(|mut socket, _index| async move {
        while let Some(Ok(message)) = socket.next().await {
            if let Message::Text(text) = message {
                let value: serde_json::Value = serde_json::from_str(&text).unwrap();
                let echo = user_message_frame(
                    value["orderId"].as_str().unwrap(),
                    value["userId"].as_str().unwrap(),
                    "echo",
                    value["message"].as_str().unwrap(),
                );
                socket.send(Message::Text(echo.into())).await.unwrap();
            }
        }
    })
    .await;

    let (sleeper, _) = recording_sleeper();
    let channel = open_channel(&chat_config(&server), sleeper).await;

    channel.send("Extra napkins please").await.unwrap();

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while channel.messages().await.is_empty() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for the echo"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let messages = channel.messages().await;
    assert_eq!(messages[0].session_id, OrderId("order-1".into()));
    assert_eq!(messages[0].sender_user_id, UserId("u-1".into()));
    assert_eq!(messages[0].body, "Extra napkins please");

    channel.close().await;
}

#[tokio::test]
async fn abnormal_close_schedules_one_reconnect_after_initial_delay() {
    let server = MockChatServer::start(|mut socket, index| async move {
        if index == 0 {
            let _ = socket
                .close(Some(CloseFrame {
                    code: CloseCode::Away,
                    reason: "".into(),
                }))
                .await;
        } else {
            socket
                .send(Message::Text(
                    user_message_frame("order-1", "chef-9", "Marco", "Back online").into(),
                ))
                .await
                .unwrap();
            while socket.next().await.is_some() {}
        }
    })
    .await;

    let (sleeper, recorded) = recording_sleeper();
    let channel = open_channel(&chat_config(&server), sleeper).await;

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while channel.messages().await.is_empty() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for the post-reconnect message"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(server.connection_count(), 2);
    assert_eq!(channel.state(), ChannelState::Connected);
    assert_eq!(
        recorded.lock().unwrap().as_slice(),
        &[Duration::from_millis(3000)]
    );

    channel.close().await;
}

#[tokio::test]
async fn normal_close_is_terminal_and_schedules_no_reconnect() {
    let server = MockChatServer::start(|mut socket, _index| async move {
        let _ = socket
            .close(Some(CloseFrame {
                code: CloseCode::Normal,
                reason: "order delivered".into(),
            }))
            .await;
    })
    .await;

    let (sleeper, recorded) = recording_sleeper();
    let channel = open_channel(&chat_config(&server), sleeper).await;

    let mut state = channel.watch_state();
    tokio::time::timeout(
        Duration::from_secs(5),
        state.wait_for(|s| *s == ChannelState::Closed),
    )
    .await
    .expect("channel should close")
    .unwrap();

    assert!(recorded.lock().unwrap().is_empty());
    assert_eq!(server.connection_count(), 1);

    let err = channel.send("anyone there?").await.unwrap_err();
    assert!(err.to_string().contains("closed"));

    channel.close().await;
}

#[tokio::test]
async fn reconnect_gives_up_after_max_attempts() {
    let server = MockChatServer::start(|mut socket, _index| async move {
        let _ = socket
            .close(Some(CloseFrame {
                code: CloseCode::Error,
                reason: "".into(),
            }))
            .await;
    })
    .await;

    let config = ChatConfig {
        ws_base_url: server.ws_base_url(),
        reconnect_max_attempts: 2,
        ..ChatConfig::default()
    };
    let (sleeper, recorded, gate) = gated_sleeper();
    let channel = open_channel(&config, sleeper).await;

    // Wait for the first reconnect to be scheduled, then take the server
    // away so every further attempt is refused.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while recorded.lock().unwrap().is_empty() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for the reconnect schedule"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    server.stop();
    gate.add_permits(2);

    let mut state = channel.watch_state();
    tokio::time::timeout(
        Duration::from_secs(5),
        state.wait_for(|s| *s == ChannelState::Closed),
    )
    .await
    .expect("channel should give up")
    .unwrap();

    assert_eq!(
        recorded.lock().unwrap().as_slice(),
        &[Duration::from_millis(3000), Duration::from_millis(6000)]
    );

    channel.close().await;
}

#[tokio::test]
async fn close_cancels_a_pending_reconnect() {
    let server = MockChatServer::start(|mut socket, _index| async move {
        let _ = socket
            .close(Some(CloseFrame {
                code: CloseCode::Away,
                reason: "".into(),
            }))
            .await;
    })
    .await;

    let (sleeper, recorded, _gate) = gated_sleeper();
    let channel = open_channel(&chat_config(&server), sleeper).await;

    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while recorded.lock().unwrap().is_empty() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for the reconnect schedule"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // The gate is never released; close() must cancel the pending attempt.
    tokio::time::timeout(Duration::from_secs(5), channel.close())
        .await
        .expect("close should not wait for the backoff delay");
    assert_eq!(server.connection_count(), 1);
}

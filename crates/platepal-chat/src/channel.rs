// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-order chat channel FSM.
//!
//! One socket per open chat: `open()` checks the REST chat-enabled
//! precondition, connects, and spawns a background task that drives the
//! socket. Incoming messages land in a bounded arrival-order log; an
//! abnormal close triggers the reconnect policy; a normal close (1000) is
//! terminal for the channel.
//!
//! States: Disconnected -> Connecting -> Connected -> (abnormal close) ->
//! Disconnected -> (backoff delay) -> Connecting ... ; Connected -> (normal
//! close) -> Closed.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::{Mutex, mpsc, watch};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use platepal_api::ApiClient;
use platepal_api::resources::chat as chat_api;
use platepal_config::ChatConfig;
use platepal_core::{ChatMessage, OrderId, PlatePalError, UserId};

use crate::backoff::ReconnectPolicy;
use crate::log::MessageLog;
use crate::wire;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Injectable delay function, so reconnection is testable without
/// wall-clock sleeps. The default sleeps on the tokio timer.
pub type Sleeper = Arc<dyn Fn(Duration) -> BoxFuture<'static, ()> + Send + Sync>;

fn tokio_sleeper() -> Sleeper {
    Arc::new(|delay| Box::pin(tokio::time::sleep(delay)))
}

/// States of a chat channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No live socket; a reconnect may be pending.
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// Full-duplex stream established; `send` is allowed.
    Connected,
    /// Terminal: normal close, exhausted retries, or explicit teardown.
    Closed,
}

impl std::fmt::Display for ChannelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelState::Disconnected => write!(f, "disconnected"),
            ChannelState::Connecting => write!(f, "connecting"),
            ChannelState::Connected => write!(f, "connected"),
            ChannelState::Closed => write!(f, "closed"),
        }
    }
}

/// A live per-order chat channel.
///
/// Dropping the handle leaves the background task running until `close()`
/// or a terminal close; call [`ChatChannel::close`] on teardown to abort the
/// socket and cancel any pending reconnect.
pub struct ChatChannel {
    order_id: OrderId,
    user_id: UserId,
    state_rx: watch::Receiver<ChannelState>,
    outbound_tx: mpsc::Sender<String>,
    log: Arc<Mutex<MessageLog>>,
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl ChatChannel {
    /// Open the chat channel for an order.
    ///
    /// Checks the backend's chat-enabled precondition first; chat is only
    /// available while the order is in an active status. Returns once the
    /// socket is established.
    pub async fn open(
        api: &ApiClient,
        config: &ChatConfig,
        order_id: OrderId,
        user_id: UserId,
    ) -> Result<Self, PlatePalError> {
        if !chat_api::chat_enabled(api, &order_id).await? {
            return Err(PlatePalError::BusinessRule {
                message: format!("chat is not available for order {}", order_id.0),
            });
        }
        Self::open_unchecked(config, order_id, user_id, tokio_sleeper()).await
    }

    /// Open without the REST precondition, with an injected delay function.
    ///
    /// Used by tests to drive the reconnect schedule deterministically.
    pub async fn open_unchecked(
        config: &ChatConfig,
        order_id: OrderId,
        user_id: UserId,
        sleeper: Sleeper,
    ) -> Result<Self, PlatePalError> {
        let url = format!(
            "{}/chat/order/{}/{}",
            config.ws_base_url.trim_end_matches('/'),
            order_id.0,
            user_id.0
        );
        let socket = establish(&url).await?;
        info!(order_id = %order_id.0, "chat socket connected");

        let log = Arc::new(Mutex::new(MessageLog::new(config.message_buffer_cap)));
        let (state_tx, state_rx) = watch::channel(ChannelState::Connected);
        let (outbound_tx, outbound_rx) = mpsc::channel(64);
        let cancel = CancellationToken::new();

        let task = ChannelTask {
            url,
            policy: ReconnectPolicy::from_config(config),
            log: log.clone(),
            state_tx,
            outbound_rx,
            cancel: cancel.clone(),
            sleeper,
        };
        let task = tokio::spawn(task.run(socket));

        Ok(Self {
            order_id,
            user_id,
            state_rx,
            outbound_tx,
            log,
            cancel,
            task,
        })
    }

    /// The order this channel belongs to.
    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Current channel state.
    pub fn state(&self) -> ChannelState {
        *self.state_rx.borrow()
    }

    /// A receiver for observing state transitions.
    pub fn watch_state(&self) -> watch::Receiver<ChannelState> {
        self.state_rx.clone()
    }

    /// Send a chat message. Only allowed while Connected.
    pub async fn send(&self, text: &str) -> Result<(), PlatePalError> {
        let state = self.state();
        if state != ChannelState::Connected {
            return Err(PlatePalError::Channel {
                message: format!("cannot send while {state}"),
                source: None,
            });
        }
        let frame = wire::encode_outbound(&self.order_id, &self.user_id, text)?;
        self.outbound_tx
            .send(frame)
            .await
            .map_err(|_| PlatePalError::Channel {
                message: "channel task has stopped".into(),
                source: None,
            })
    }

    /// Snapshot of the visible log, oldest first.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.log.lock().await.snapshot()
    }

    /// Tear the channel down: abort the socket and cancel any pending
    /// reconnect.
    pub async fn close(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

async fn establish(url: &str) -> Result<WsStream, PlatePalError> {
    let (socket, _response) =
        connect_async(url).await.map_err(|e| PlatePalError::Channel {
            message: format!("failed to connect chat socket: {e}"),
            source: Some(Box::new(e)),
        })?;
    Ok(socket)
}

/// Why the connected phase ended.
enum Disconnect {
    /// Teardown requested; no reconnect.
    Cancelled,
    /// Server closed with code 1000; terminal.
    Normal,
    /// Any other close, error, or stream end; eligible for reconnect.
    Abnormal(String),
}

/// Background task owning the socket and the reconnect schedule.
struct ChannelTask {
    url: String,
    policy: ReconnectPolicy,
    log: Arc<Mutex<MessageLog>>,
    state_tx: watch::Sender<ChannelState>,
    outbound_rx: mpsc::Receiver<String>,
    cancel: CancellationToken,
    sleeper: Sleeper,
}

impl ChannelTask {
    async fn run(mut self, mut socket: WsStream) {
        loop {
            match self.drive(&mut socket).await {
                Disconnect::Cancelled => {
                    let _ = socket.close(None).await;
                    self.state_tx.send_replace(ChannelState::Closed);
                    return;
                }
                Disconnect::Normal => {
                    debug!("chat socket closed normally");
                    self.state_tx.send_replace(ChannelState::Closed);
                    return;
                }
                Disconnect::Abnormal(reason) => {
                    warn!(reason = reason.as_str(), "chat socket dropped");
                    self.state_tx.send_replace(ChannelState::Disconnected);
                }
            }

            match self.reconnect().await {
                Some(next) => socket = next,
                None => {
                    self.state_tx.send_replace(ChannelState::Closed);
                    return;
                }
            }
        }
    }

    /// Pump the connected socket until it drops or teardown is requested.
    async fn drive(&mut self, socket: &mut WsStream) -> Disconnect {
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => return Disconnect::Cancelled,
                outbound = self.outbound_rx.recv() => {
                    let Some(frame) = outbound else {
                        // All channel handles dropped; nothing left to do.
                        return Disconnect::Cancelled;
                    };
                    if let Err(e) = socket.send(Message::Text(frame.into())).await {
                        return Disconnect::Abnormal(format!("send failed: {e}"));
                    }
                }
                incoming = socket.next() => {
                    match incoming {
                        Some(Ok(Message::Text(text))) => self.handle_inbound(&text).await,
                        Some(Ok(Message::Close(frame))) => return classify_close(frame),
                        Some(Ok(_)) => {} // binary/ping/pong handled by tungstenite
                        Some(Err(e)) => {
                            return Disconnect::Abnormal(format!("socket error: {e}"));
                        }
                        None => return Disconnect::Abnormal("socket stream ended".into()),
                    }
                }
            }
        }
    }

    /// Append an inbound frame to the log. Malformed payloads are dropped
    /// silently; the system welcome is filtered from the visible log.
    async fn handle_inbound(&self, text: &str) {
        match wire::parse_inbound(text) {
            Ok(msg) if wire::is_system_welcome(&msg) => {
                debug!("filtered system welcome message");
            }
            Ok(msg) => self.log.lock().await.push(msg),
            Err(e) => warn!(error = %e, "dropping malformed chat frame"),
        }
    }

    /// Run the backoff schedule until a connection is re-established.
    ///
    /// Returns `None` when attempts are exhausted or teardown was requested.
    async fn reconnect(&mut self) -> Option<WsStream> {
        let mut attempt: u32 = 0;
        loop {
            let delay = match self.policy.delay_for_attempt(attempt) {
                Some(delay) => delay,
                None => {
                    warn!(attempts = attempt, "reconnect attempts exhausted");
                    return None;
                }
            };
            attempt += 1;

            debug!(delay_ms = delay.as_millis() as u64, attempt, "reconnect scheduled");
            let sleep = (self.sleeper)(delay);
            tokio::select! {
                _ = self.cancel.cancelled() => return None,
                _ = sleep => {}
            }

            self.state_tx.send_replace(ChannelState::Connecting);
            match establish(&self.url).await {
                Ok(socket) => {
                    info!(attempt, "chat socket reconnected");
                    self.state_tx.send_replace(ChannelState::Connected);
                    return Some(socket);
                }
                Err(e) => {
                    warn!(error = %e, attempt, "reconnect attempt failed");
                    self.state_tx.send_replace(ChannelState::Disconnected);
                }
            }
        }
    }
}

fn classify_close(frame: Option<CloseFrame>) -> Disconnect {
    match frame {
        Some(frame) if frame.code == CloseCode::Normal => Disconnect::Normal,
        Some(frame) => Disconnect::Abnormal(format!("close code {:?}", frame.code)),
        None => Disconnect::Abnormal("close without frame".into()),
    }
}

// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process WebSocket server for chat channel tests.
//!
//! Binds an ephemeral local port and runs a caller-supplied handler for each
//! accepted connection. The handler receives the raw server-side socket and
//! the zero-based connection index, so tests can script different behavior
//! for the first connection and for reconnects.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{WebSocketStream, accept_async};

/// Server side of an accepted mock chat connection.
pub type ServerSocket = WebSocketStream<TcpStream>;

/// A scripted WebSocket server on an ephemeral local port.
pub struct MockChatServer {
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
    accept_task: tokio::task::JoinHandle<()>,
}

impl MockChatServer {
    /// Start the server. `handler` runs once per accepted connection.
    pub async fn start<F, Fut>(handler: F) -> Self
    where
        F: Fn(ServerSocket, usize) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let connections = Arc::new(AtomicUsize::new(0));

        let handler = Arc::new(handler);
        let counter = connections.clone();
        let accept_task = tokio::spawn(async move {
            loop {
                let Ok((stream, _peer)) = listener.accept().await else {
                    break;
                };
                let index = counter.fetch_add(1, Ordering::SeqCst);
                let handler = handler.clone();
                tokio::spawn(async move {
                    if let Ok(socket) = accept_async(stream).await {
                        handler(socket, index).await;
                    }
                });
            }
        });

        Self {
            addr,
            connections,
            accept_task,
        }
    }

    /// Base URL for clients, e.g. `ws://127.0.0.1:PORT`. The chat channel
    /// appends its `/chat/order/{order}/{user}` path; the mock server
    /// accepts any path.
    pub fn ws_base_url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// How many connections have been accepted so far.
    pub fn connection_count(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    /// Stop accepting connections and release the port. Connections already
    /// handed to a handler keep running; new connects are refused.
    pub fn stop(&self) {
        self.accept_task.abort();
    }
}

impl Drop for MockChatServer {
    fn drop(&mut self) {
        self.accept_task.abort();
    }
}

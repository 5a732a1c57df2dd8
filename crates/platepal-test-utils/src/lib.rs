// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for the PlatePal workspace: a scripted in-process
//! WebSocket server and token/message fixtures.
//!
//! Dev-dependency only; never shipped with the client crates.

pub mod fixtures;
pub mod mock_chat_server;

pub use fixtures::{
    jwt_expiring_in, system_message_frame, unsigned_jwt, user_message_frame,
};
pub use mock_chat_server::{MockChatServer, ServerSocket};

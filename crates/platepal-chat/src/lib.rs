// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Real-time chat channel for PlatePal orders.
//!
//! One WebSocket per open chat, a bounded arrival-order message log, and an
//! exponential-backoff reconnect policy applied after abnormal closes. The
//! REST side of chat (enabled precondition, history pages) lives in
//! `platepal-api`.

pub mod backoff;
pub mod channel;
pub mod log;
pub mod wire;

pub use backoff::ReconnectPolicy;
pub use channel::{ChannelState, ChatChannel, Sleeper};
pub use log::MessageLog;
pub use wire::{OutboundFrame, SYSTEM_WELCOME_PREFIX};

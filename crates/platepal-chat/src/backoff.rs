// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconnect backoff policy for the chat socket.
//!
//! After an abnormal close the channel retries with exponentially growing
//! delays: the first attempt fires after the initial delay, each subsequent
//! delay doubles, the delay is capped, and attempts stop at the configured
//! maximum. A successful reconnect resets the sequence.

use std::time::Duration;

use platepal_config::ChatConfig;

/// Exponential backoff schedule for socket reconnects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconnectPolicy {
    initial_delay: Duration,
    max_delay: Duration,
    max_attempts: u32,
}

impl ReconnectPolicy {
    pub fn new(initial_delay: Duration, max_delay: Duration, max_attempts: u32) -> Self {
        Self {
            initial_delay,
            max_delay,
            max_attempts,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            Duration::from_millis(config.reconnect_initial_delay_ms),
            Duration::from_millis(config.reconnect_max_delay_ms),
            config.reconnect_max_attempts,
        )
    }

    /// Delay before reconnect attempt `attempt` (zero-based), or `None` when
    /// attempts are exhausted.
    pub fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        // Shift capped at 20: beyond that the delay is far past any
        // reasonable max_delay and would overflow first.
        let factor = 1u64 << attempt.min(20);
        let millis = (self.initial_delay.as_millis() as u64)
            .saturating_mul(factor)
            .min(self.max_delay.as_millis() as u64);
        Some(Duration::from_millis(millis))
    }
}

// SPDX-FileCopyrightText: 2026 PlatePal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded, append-only message log.
//!
//! Messages are kept in socket-arrival order. The log is capped so an open
//! chat cannot grow without bound; the oldest entries are evicted first.
//! Older history remains available through the REST history pages.

use std::collections::VecDeque;

use platepal_core::ChatMessage;

/// Append-only log of chat messages with a fixed capacity.
#[derive(Debug)]
pub struct MessageLog {
    cap: usize,
    entries: VecDeque<ChatMessage>,
}

impl MessageLog {
    /// Create a log holding at most `cap` messages. A zero cap is clamped
    /// to one so a push is never itself evicted.
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Append a message, evicting the oldest entry when full.
    pub fn push(&mut self, message: ChatMessage) {
        if self.entries.len() == self.cap {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The visible log, oldest first.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.entries.iter().cloned().collect()
    }
}

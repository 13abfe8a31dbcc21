//! Message log
//!
//! Append-only, arrival-ordered history of broadcast and private messages.
//! Entries are never edited, deleted, or re-sorted by timestamp; the whole
//! log is discarded with the session. Inbound messages carry no server id,
//! so a synthetic key over the message contents backs a bounded
//! recently-seen window that drops transport redeliveries.

use std::collections::{HashSet, VecDeque};

use chat_core::{ChatMessage, MessageKey};

/// How many synthetic keys the redelivery window remembers
const RECENT_KEY_WINDOW: usize = 256;

/// Ordered, deduplicated message history
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<ChatMessage>,
    recent_keys: HashSet<MessageKey>,
    recent_order: VecDeque<MessageKey>,
}

impl MessageLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a received message in arrival order.
    ///
    /// Returns `false` when the message's synthetic key is still inside
    /// the recently-seen window, i.e. the transport redelivered it.
    pub fn append(&mut self, message: ChatMessage) -> bool {
        let key = message.key();
        if self.recent_keys.contains(&key) {
            tracing::debug!(key = %key, sender = %message.sender, "Dropping redelivered message");
            return false;
        }

        self.remember(key);
        self.entries.push(message);
        true
    }

    /// All messages, in arrival order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.entries
    }

    /// Lazy, restartable projection of messages whose text contains `term`
    /// (case-insensitive). An empty term yields the full log.
    pub fn filter<'a>(&'a self, term: &'a str) -> impl Iterator<Item = &'a ChatMessage> + 'a {
        self.entries.iter().filter(move |msg| msg.matches(term))
    }

    /// Number of messages in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn remember(&mut self, key: MessageKey) {
        if self.recent_order.len() == RECENT_KEY_WINDOW {
            if let Some(evicted) = self.recent_order.pop_front() {
                self.recent_keys.remove(&evicted);
            }
        }
        self.recent_order.push_back(key);
        self.recent_keys.insert(key);
    }
}

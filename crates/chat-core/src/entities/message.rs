//! Message entity - a single broadcast or private chat message

use serde::{Deserialize, Serialize};

use crate::value_objects::{MessageKey, UserId};

/// A chat message as delivered by the relay server.
///
/// Immutable once appended to the message log. Field names mirror the wire
/// payload of `receive_message` / `private_message` events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the sending user
    pub sender: String,

    /// Message text
    pub message: String,

    /// Send time in epoch milliseconds, display-only (log order is arrival order)
    pub timestamp: i64,

    /// Whether this message was routed to exactly one recipient
    #[serde(default, rename = "isPrivate")]
    pub is_private: bool,

    /// Recipient id for private messages (absent on broadcast)
    #[serde(default, rename = "to", skip_serializing_if = "Option::is_none")]
    pub recipient: Option<UserId>,
}

impl ChatMessage {
    /// Create a broadcast message
    pub fn broadcast(sender: impl Into<String>, message: impl Into<String>, timestamp: i64) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            timestamp,
            is_private: false,
            recipient: None,
        }
    }

    /// Create a private message addressed to one user
    pub fn private(
        sender: impl Into<String>,
        message: impl Into<String>,
        timestamp: i64,
        recipient: UserId,
    ) -> Self {
        Self {
            sender: sender.into(),
            message: message.into(),
            timestamp,
            is_private: true,
            recipient: Some(recipient),
        }
    }

    /// Synthetic identity used to drop transport redeliveries
    pub fn key(&self) -> MessageKey {
        MessageKey::compute(self)
    }

    /// Case-insensitive substring match against the message text
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.message.to_lowercase().contains(&term.to_lowercase())
    }

    /// Check if message text is effectively empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

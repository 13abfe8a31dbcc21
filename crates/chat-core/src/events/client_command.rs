//! Outbound client commands
//!
//! High-level user intents already validated by the command router,
//! shaped for the relay's named-event wire format. All commands are
//! fire-and-forget: the relay sends no acknowledgement.

use serde_json::Value;

use crate::events::WireMessage;
use crate::value_objects::UserId;

/// Commands the client sends to the relay server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Register a session identity (trimmed, non-empty username)
    UserJoin { username: String },
    /// Broadcast a message to all connected users
    SendMessage { message: String, timestamp: i64 },
    /// Send a message to exactly one recipient
    PrivateMessage {
        message: String,
        timestamp: i64,
        to: UserId,
    },
    /// Live typing indicator: true while the compose field is non-empty
    Typing(bool),
}

impl ClientCommand {
    /// Wire event name for `user_join`
    pub const USER_JOIN: &'static str = "user_join";
    /// Wire event name for `send_message`
    pub const SEND_MESSAGE: &'static str = "send_message";
    /// Wire event name for `private_message`
    pub const PRIVATE_MESSAGE: &'static str = "private_message";
    /// Wire event name for `typing`
    pub const TYPING: &'static str = "typing";

    /// Get the wire event name for this command
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::UserJoin { .. } => Self::USER_JOIN,
            Self::SendMessage { .. } => Self::SEND_MESSAGE,
            Self::PrivateMessage { .. } => Self::PRIVATE_MESSAGE,
            Self::Typing(_) => Self::TYPING,
        }
    }

    /// Build the wire payload for this command
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::UserJoin { username } => Value::String(username.clone()),
            // Broadcast keeps an explicit null `to`, matching the relay contract
            Self::SendMessage { message, timestamp } => serde_json::json!({
                "message": message,
                "timestamp": timestamp,
                "to": Value::Null,
            }),
            Self::PrivateMessage {
                message,
                timestamp,
                to,
            } => serde_json::json!({
                "message": message,
                "timestamp": timestamp,
                "to": to,
            }),
            Self::Typing(active) => Value::Bool(*active),
        }
    }

    /// Wrap into the wire envelope
    #[must_use]
    pub fn to_wire(&self) -> WireMessage {
        WireMessage::new(self.event_name(), self.payload())
    }
}

impl std::fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClientCommand({})", self.event_name())
    }
}

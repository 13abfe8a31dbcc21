//! Inbound server events
//!
//! Tagged-variant decoding of server-pushed events. Each named wire event
//! maps to exactly one variant, so a single dispatch point replaces
//! per-name callback registration and duplicate delivery across
//! re-subscription cannot occur.

use serde_json::Value;
use thiserror::Error;

use crate::entities::{ChatMessage, OnlineUser};
use crate::events::WireMessage;

/// Events pushed by the relay server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// A broadcast message, visible to all connected users
    ReceiveMessage(ChatMessage),
    /// A message routed to this client only
    PrivateMessage(ChatMessage),
    /// Full replacement snapshot of the online-user roster
    UserList(Vec<OnlineUser>),
    /// Full replacement snapshot of usernames currently typing
    TypingUsers(Vec<String>),
    /// Transport-level connection failure (terminal after retry exhaustion)
    ConnectError,
}

/// Errors decoding an inbound wire frame
#[derive(Debug, Error)]
pub enum EventDecodeError {
    #[error("Unknown event name: {0}")]
    UnknownEvent(String),

    #[error("Missing payload for event: {0}")]
    MissingPayload(&'static str),

    #[error("Malformed payload for event {event}: {source}")]
    MalformedPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ServerEvent {
    /// Wire event name for `receive_message`
    pub const RECEIVE_MESSAGE: &'static str = "receive_message";
    /// Wire event name for `private_message`
    pub const PRIVATE_MESSAGE: &'static str = "private_message";
    /// Wire event name for `user_list`
    pub const USER_LIST: &'static str = "user_list";
    /// Wire event name for `typing_users`
    pub const TYPING_USERS: &'static str = "typing_users";
    /// Wire event name for `connect_error`
    pub const CONNECT_ERROR: &'static str = "connect_error";

    /// Decode a wire envelope into a typed event
    pub fn decode(wire: &WireMessage) -> Result<Self, EventDecodeError> {
        match wire.event.as_str() {
            Self::RECEIVE_MESSAGE => Ok(Self::ReceiveMessage(Self::payload(
                Self::RECEIVE_MESSAGE,
                wire.data.as_ref(),
            )?)),
            Self::PRIVATE_MESSAGE => {
                let mut msg: ChatMessage =
                    Self::payload(Self::PRIVATE_MESSAGE, wire.data.as_ref())?;
                // The event name is authoritative even if the flag is absent
                msg.is_private = true;
                Ok(Self::PrivateMessage(msg))
            }
            Self::USER_LIST => Ok(Self::UserList(Self::payload(
                Self::USER_LIST,
                wire.data.as_ref(),
            )?)),
            Self::TYPING_USERS => Ok(Self::TypingUsers(Self::payload(
                Self::TYPING_USERS,
                wire.data.as_ref(),
            )?)),
            Self::CONNECT_ERROR => Ok(Self::ConnectError),
            other => Err(EventDecodeError::UnknownEvent(other.to_string())),
        }
    }

    /// Get the wire event name for this event
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::ReceiveMessage(_) => Self::RECEIVE_MESSAGE,
            Self::PrivateMessage(_) => Self::PRIVATE_MESSAGE,
            Self::UserList(_) => Self::USER_LIST,
            Self::TypingUsers(_) => Self::TYPING_USERS,
            Self::ConnectError => Self::CONNECT_ERROR,
        }
    }

    fn payload<T: serde::de::DeserializeOwned>(
        event: &'static str,
        data: Option<&Value>,
    ) -> Result<T, EventDecodeError> {
        let data = data.ok_or(EventDecodeError::MissingPayload(event))?;
        serde_json::from_value(data.clone())
            .map_err(|source| EventDecodeError::MalformedPayload { event, source })
    }
}

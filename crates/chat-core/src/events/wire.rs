//! Wire envelope
//!
//! Every frame exchanged with the relay is a JSON object carrying a named
//! event and an optional payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire envelope format
///
/// All frames sent over the channel follow this format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    /// Event name (e.g. `receive_message`, `user_join`)
    pub event: String,

    /// Event data payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl WireMessage {
    /// Create an envelope with a payload
    #[must_use]
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data: Some(data),
        }
    }

    /// Create a payload-less envelope
    #[must_use]
    pub fn bare(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            data: None,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl std::fmt::Display for WireMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WireMessage(event={})", self.event)
    }
}

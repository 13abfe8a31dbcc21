//! Opaque user identifier issued by the relay server

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a connected user.
///
/// The relay server mints these; the client never inspects their structure,
/// only compares them and echoes them back in private-message commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new `UserId` from its wire representation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the wire representation
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

//! User entity - an entry in the server-pushed roster

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// A currently-online user as reported by the relay's `user_list` snapshot.
///
/// Lifecycle is owned entirely by the server: each snapshot fully replaces
/// the prior roster, the client never mutates individual entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnlineUser {
    pub id: UserId,
    pub username: String,
}

impl OnlineUser {
    /// Create a new roster entry
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
        }
    }
}

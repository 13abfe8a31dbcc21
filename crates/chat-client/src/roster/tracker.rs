//! Roster tracker
//!
//! Holds the latest server-pushed snapshots of online users and typing
//! users, plus the private-message recipient selection. The server is the
//! sole authority: every snapshot fully replaces the previous one, no
//! merging or diffing.

use chat_core::{OnlineUser, UserId};

/// Tracks roster, typing set, and recipient selection
#[derive(Debug, Default)]
pub struct RosterTracker {
    users: Vec<OnlineUser>,
    typing: Vec<String>,
    recipient: Option<UserId>,
}

impl RosterTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster with a new snapshot.
    ///
    /// A recipient selection whose user vanished from the snapshot is
    /// cleared here, so a stale id can never leak into a private-message
    /// command.
    pub fn apply_roster(&mut self, users: Vec<OnlineUser>) {
        self.users = users;

        if let Some(selected) = &self.recipient {
            if !self.contains(selected) {
                tracing::debug!(recipient = %selected, "Recipient left, clearing selection");
                self.recipient = None;
            }
        }

        tracing::trace!(count = self.users.len(), "Roster snapshot applied");
    }

    /// Replace the typing set with a new snapshot.
    ///
    /// Self-exclusion happens at read time in [`typing_display`], so the
    /// stored set may still include the acting user.
    ///
    /// [`typing_display`]: Self::typing_display
    pub fn apply_typing(&mut self, usernames: Vec<String>) {
        self.typing = usernames;
    }

    /// Current roster, in server order
    pub fn users(&self) -> &[OnlineUser] {
        &self.users
    }

    /// Check whether a user id is present in the live roster
    pub fn contains(&self, id: &UserId) -> bool {
        self.users.iter().any(|user| &user.id == id)
    }

    /// Typing usernames for display, excluding the acting user
    pub fn typing_display(&self, own_username: Option<&str>) -> Vec<&str> {
        self.typing
            .iter()
            .map(String::as_str)
            .filter(|name| Some(*name) != own_username)
            .collect()
    }

    /// Toggle the private-message recipient.
    ///
    /// Selecting the already-selected user clears the selection; selecting
    /// an id missing from the roster is ignored.
    pub fn toggle_recipient(&mut self, id: &UserId) {
        if self.recipient.as_ref() == Some(id) {
            self.recipient = None;
        } else if self.contains(id) {
            self.recipient = Some(id.clone());
        } else {
            tracing::debug!(recipient = %id, "Unknown user, selection ignored");
        }
    }

    /// Currently selected recipient, re-validated against the live roster
    pub fn recipient(&self) -> Option<&UserId> {
        self.recipient
            .as_ref()
            .filter(|selected| self.contains(selected))
    }
}

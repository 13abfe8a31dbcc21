//! Session state machine
//!
//! Tracks identity registration for the lifetime of one session. The
//! transition is one-way: once `Registered` the state never changes and
//! the username is immutable. Registration is optimistic; the relay sends
//! no confirmation and no rejection path is modeled.

/// Registration phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No identity yet; outgoing message/typing commands are gated off
    #[default]
    Unregistered,
    /// Identity announced to the relay; terminal for this session
    Registered,
}

/// Session identity holder
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
    username: Option<String>,
}

impl Session {
    /// Create a fresh unregistered session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current state
    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check whether the session holds an identity
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.state == SessionState::Registered
    }

    /// Registered username, if any
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Attempt the one-way transition to `Registered`.
    ///
    /// Returns the trimmed username to announce, or `None` when the input
    /// trims to empty or the session is already registered (both silent
    /// no-ops, never errors).
    pub fn register(&mut self, username: &str) -> Option<String> {
        if self.is_registered() {
            tracing::debug!("Already registered, ignoring");
            return None;
        }

        let trimmed = username.trim();
        if trimmed.is_empty() {
            tracing::debug!("Empty username, ignoring registration");
            return None;
        }

        self.username = Some(trimmed.to_string());
        self.state = SessionState::Registered;
        tracing::info!(username = trimmed, "Session registered");

        Some(trimmed.to_string())
    }
}

//! Command router
//!
//! Turns validated user intents into correctly shaped outbound commands.
//! Enforces the registration gate for message and typing commands, routes
//! between broadcast and private semantics, and keeps typing emission
//! edge-triggered so fast typists do not flood the channel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chat_core::{ClientCommand, UserId};
use chrono::Utc;

use crate::channel::EventChannel;
use crate::session::Session;

/// Idle window after which an active typing indicator auto-clears
pub const TYPING_IDLE: Duration = Duration::from_secs(3);

/// Routes user intents to the relay channel
pub struct CommandRouter {
    channel: Arc<dyn EventChannel>,
    typing_active: bool,
    typing_deadline: Option<Instant>,
}

impl CommandRouter {
    /// Create a router emitting through the given channel
    #[must_use]
    pub fn new(channel: Arc<dyn EventChannel>) -> Self {
        Self {
            channel,
            typing_active: false,
            typing_deadline: None,
        }
    }

    /// Register the session identity and announce it to the relay.
    ///
    /// Silent no-op (returns false) on blank usernames or when already
    /// registered.
    pub fn register(&self, session: &mut Session, username: &str) -> bool {
        match session.register(username) {
            Some(username) => {
                self.channel.send(ClientCommand::UserJoin { username });
                true
            }
            None => false,
        }
    }

    /// Submit a message, routed private when a validated recipient is set.
    ///
    /// Silent no-op (returns false) when the session is unregistered or
    /// the text trims to empty. Returns true only when a command was
    /// emitted, so callers clear the compose field on success only.
    pub fn submit_message(
        &mut self,
        session: &Session,
        recipient: Option<&UserId>,
        text: &str,
    ) -> bool {
        if !session.is_registered() {
            tracing::debug!("Unregistered session, message dropped");
            return false;
        }
        if text.trim().is_empty() {
            return false;
        }

        let timestamp = Utc::now().timestamp_millis();
        let command = match recipient {
            Some(to) => ClientCommand::PrivateMessage {
                message: text.to_string(),
                timestamp,
                to: to.clone(),
            },
            None => ClientCommand::SendMessage {
                message: text.to_string(),
                timestamp,
            },
        };

        tracing::debug!(command = %command, "Submitting message");
        self.channel.send(command);
        true
    }

    /// Report a compose-field change.
    ///
    /// Emission is edge-triggered: a `typing` command goes out only when
    /// the non-empty/empty state crosses an edge, never per keystroke.
    /// Gated on a registered session.
    pub fn notify_typing(&mut self, session: &Session, current_text: &str) {
        if !session.is_registered() {
            return;
        }

        let active = !current_text.is_empty();
        self.typing_deadline = active.then(|| Instant::now() + TYPING_IDLE);

        if active != self.typing_active {
            self.typing_active = active;
            self.channel.send(ClientCommand::Typing(active));
        }
    }

    /// Auto-clear an active typing indicator once the idle window lapses.
    ///
    /// The owner calls this periodically with the current instant.
    pub fn tick(&mut self, session: &Session, now: Instant) {
        if !session.is_registered() || !self.typing_active {
            return;
        }

        if self.typing_deadline.is_some_and(|deadline| now >= deadline) {
            self.typing_active = false;
            self.typing_deadline = None;
            self.channel.send(ClientCommand::Typing(false));
        }
    }

    /// Whether the last emitted typing state is active
    #[inline]
    pub fn is_typing(&self) -> bool {
        self.typing_active
    }
}

impl std::fmt::Debug for CommandRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRouter")
            .field("typing_active", &self.typing_active)
            .finish()
    }
}

//! Client composition root
//!
//! Owns every piece of session state and is the only place it mutates:
//! inbound channel signals flow through [`ChatClient::handle_signal`],
//! user intents through the intent methods. Handlers run to completion
//! before the next event is processed, so the presentation layer never
//! observes a partial update. The channel adapter is injected, never a
//! module-level singleton, so transports and notifiers can be doubled in
//! tests.

use std::sync::Arc;
use std::time::Instant;

use chat_core::{ChatMessage, OnlineUser, ServerEvent, UserId};

use crate::channel::{ChannelSignal, ConnectionStatus, EventChannel};
use crate::command::CommandRouter;
use crate::history::MessageLog;
use crate::notify::{NotificationDispatcher, Notifier};
use crate::roster::RosterTracker;
use crate::session::{Session, SessionState};

/// Client-side chat session state machine
pub struct ChatClient {
    session: Session,
    roster: RosterTracker,
    log: MessageLog,
    dispatcher: NotificationDispatcher,
    router: CommandRouter,
    status: ConnectionStatus,
}

impl ChatClient {
    /// Create a client emitting through `channel` and notifying through
    /// `notifier`
    #[must_use]
    pub fn new(channel: Arc<dyn EventChannel>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            session: Session::new(),
            roster: RosterTracker::new(),
            log: MessageLog::new(),
            dispatcher: NotificationDispatcher::new(notifier),
            router: CommandRouter::new(channel),
            status: ConnectionStatus::Connecting,
        }
    }

    // === Inbound ===

    /// Consume one channel signal, in delivery order
    pub fn handle_signal(&mut self, signal: ChannelSignal) {
        match signal {
            ChannelSignal::Connected => {
                self.status = ConnectionStatus::Connected;
            }
            ChannelSignal::Disconnected => {
                // Previously registered session state is deliberately kept;
                // the adapter is still retrying
                self.status = ConnectionStatus::Disconnected;
            }
            ChannelSignal::ConnectFailed => {
                tracing::error!("Connection failed, no further retries");
                self.status = ConnectionStatus::Failed;
            }
            ChannelSignal::Event(event) => self.handle_event(event),
        }
    }

    /// Apply one server-pushed event to local state
    pub fn handle_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::ReceiveMessage(message) => {
                // Side effects fire only for messages that actually
                // appended; redeliveries stay silent
                if self.log.append(message) {
                    if let Some(appended) = self.log.messages().last() {
                        self.dispatcher.on_broadcast(appended);
                    }
                }
            }
            ServerEvent::PrivateMessage(message) => {
                // Append only: no sound, no notification, no unread
                let _ = self.log.append(message);
            }
            ServerEvent::UserList(users) => self.roster.apply_roster(users),
            ServerEvent::TypingUsers(usernames) => self.roster.apply_typing(usernames),
            ServerEvent::ConnectError => {
                tracing::error!("Relay reported a connection error");
                self.status = ConnectionStatus::Failed;
            }
        }
    }

    // === User intents ===

    /// Register the session identity; true when `user_join` was emitted
    pub fn register(&mut self, username: &str) -> bool {
        self.router.register(&mut self.session, username)
    }

    /// Send the composed text, private when a recipient is selected.
    ///
    /// Returns true when a command was emitted; only then should the
    /// caller clear its compose field. A successful send also clears the
    /// typing indicator, mirroring the emptied compose field.
    pub fn submit_message(&mut self, text: &str) -> bool {
        let recipient = self.roster.recipient().cloned();
        let sent = self
            .router
            .submit_message(&self.session, recipient.as_ref(), text);

        if sent {
            self.router.notify_typing(&self.session, "");
        }
        sent
    }

    /// Report a compose-field change (drives the typing indicator)
    pub fn input_changed(&mut self, current_text: &str) {
        self.router.notify_typing(&self.session, current_text);
    }

    /// Periodic upkeep: auto-clears an idle typing indicator
    pub fn tick(&mut self, now: Instant) {
        self.router.tick(&self.session, now);
    }

    /// Toggle the private-message recipient selection
    pub fn toggle_recipient(&mut self, id: &UserId) {
        self.roster.toggle_recipient(id);
    }

    /// Track window focus; gaining focus resets the unread counter
    pub fn set_focused(&mut self, focused: bool) {
        self.dispatcher.set_focused(focused);
    }

    // === Derived state (read-only observers) ===

    /// Full message history in arrival order
    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    /// Messages whose text contains `term`, case-insensitive
    pub fn filtered_messages<'a>(
        &'a self,
        term: &'a str,
    ) -> impl Iterator<Item = &'a ChatMessage> + 'a {
        self.log.filter(term)
    }

    /// Current roster, in server order
    pub fn users(&self) -> &[OnlineUser] {
        self.roster.users()
    }

    /// Usernames currently typing, excluding this session's own name
    pub fn typing_display(&self) -> Vec<&str> {
        self.roster.typing_display(self.session.username())
    }

    /// Selected private-message recipient, validated against the roster
    pub fn recipient(&self) -> Option<&UserId> {
        self.roster.recipient()
    }

    /// Broadcast messages received while unfocused
    pub fn unread_count(&self) -> u32 {
        self.dispatcher.unread_count()
    }

    /// Registration state
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Registered username, if any
    pub fn username(&self) -> Option<&str> {
        self.session.username()
    }

    /// Connection phase as last reported by the channel adapter
    pub fn connection_status(&self) -> ConnectionStatus {
        self.status
    }
}

impl std::fmt::Debug for ChatClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatClient")
            .field("session", &self.session.state())
            .field("status", &self.status)
            .field("messages", &self.log.len())
            .field("users", &self.roster.users().len())
            .finish()
    }
}

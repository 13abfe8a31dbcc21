//! Test helpers for integration tests
//!
//! Provides a recording channel double, a recording notifier, a relay
//! WebSocket stub, and builders for server-pushed events.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use chat_client::{ChatClient, EventChannel, Notifier};
use chat_core::{ChatMessage, ClientCommand, OnlineUser, ServerEvent};

/// Channel double that records every command the client emits
#[derive(Default)]
pub struct RecordingChannel {
    sent: Mutex<Vec<ClientCommand>>,
}

impl RecordingChannel {
    /// Create a shared recording channel
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything sent so far
    pub fn commands(&self) -> Vec<ClientCommand> {
        self.sent.lock().unwrap().clone()
    }

    /// Event names of everything sent so far
    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands().iter().map(ClientCommand::event_name).collect()
    }
}

impl EventChannel for RecordingChannel {
    fn send(&self, command: ClientCommand) {
        self.sent.lock().unwrap().push(command);
    }
}

/// Notifier double counting side-effect invocations
#[derive(Default)]
pub struct RecordingNotifier {
    pub sounds: Arc<AtomicU32>,
    pub notifications: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    /// Handles for asserting on counts after the notifier is boxed away
    pub fn probes(&self) -> (Arc<AtomicU32>, Arc<Mutex<Vec<(String, String)>>>) {
        (self.sounds.clone(), self.notifications.clone())
    }
}

impl Notifier for RecordingNotifier {
    fn play_sound(&self) {
        self.sounds.fetch_add(1, Ordering::SeqCst);
    }

    fn show_notification(&self, title: &str, body: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }
}

/// Build a client wired to recording doubles
pub fn recording_client() -> (
    Arc<RecordingChannel>,
    Arc<AtomicU32>,
    Arc<Mutex<Vec<(String, String)>>>,
    ChatClient,
) {
    let channel = RecordingChannel::shared();
    let notifier = RecordingNotifier::default();
    let (sounds, notifications) = notifier.probes();
    let client = ChatClient::new(channel.clone(), Box::new(notifier));
    (channel, sounds, notifications, client)
}

// === Event builders ===

/// Server-pushed broadcast message
pub fn broadcast(sender: &str, text: &str, timestamp: i64) -> ServerEvent {
    ServerEvent::ReceiveMessage(ChatMessage::broadcast(sender, text, timestamp))
}

/// Server-pushed private message
pub fn private(sender: &str, text: &str, timestamp: i64) -> ServerEvent {
    let mut message = ChatMessage::broadcast(sender, text, timestamp);
    message.is_private = true;
    ServerEvent::PrivateMessage(message)
}

/// Server-pushed roster snapshot
pub fn user_list(entries: &[(&str, &str)]) -> ServerEvent {
    ServerEvent::UserList(
        entries
            .iter()
            .map(|(id, name)| OnlineUser::new(*id, *name))
            .collect(),
    )
}

/// Server-pushed typing snapshot
pub fn typing_users(names: &[&str]) -> ServerEvent {
    ServerEvent::TypingUsers(names.iter().map(ToString::to_string).collect())
}

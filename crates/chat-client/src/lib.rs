//! # chat-client
//!
//! Client-side core for the relay chat: connection lifecycle, session state
//! machine, roster and typing snapshots, deduplicated message log,
//! notification dispatch, and outbound command routing.
//!
//! The presentation layer is a read-only observer: it reads derived state
//! from [`ChatClient`] and forwards raw user intents back into it.

pub mod channel;
pub mod client;
pub mod command;
pub mod history;
pub mod notify;
pub mod roster;
pub mod session;

// Re-export commonly used types at crate root
pub use channel::{ChannelSignal, ConnectionStatus, EventChannel, WsChannel};
pub use client::ChatClient;
pub use command::{CommandRouter, TYPING_IDLE};
pub use history::MessageLog;
pub use notify::{NotificationDispatcher, Notifier, TracingNotifier};
pub use roster::RosterTracker;
pub use session::{Session, SessionState};

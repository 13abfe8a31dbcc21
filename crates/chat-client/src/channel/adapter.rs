//! Abstract event channel
//!
//! The client core never talks to a socket directly. It sends commands
//! through [`EventChannel`] and consumes [`ChannelSignal`]s the adapter
//! surfaces, so transports can be swapped for test doubles.

use chat_core::{ClientCommand, ServerEvent};

/// Outbound half of the duplex channel.
///
/// `send` is fire-and-forget: no acknowledgement is expected and failures
/// are swallowed by the implementation (logged at most). Implementations
/// must never block the caller.
pub trait EventChannel: Send + Sync {
    /// Transmit a command to the relay
    fn send(&self, command: ClientCommand);
}

/// Signals surfaced by a channel adapter to its owner.
///
/// Delivered strictly in order; one signal at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelSignal {
    /// Transport established (initial connect or successful reconnect)
    Connected,
    /// Transport dropped; the adapter is re-entering its retry loop
    Disconnected,
    /// Retry budget exhausted. Terminal: emitted exactly once, the
    /// adapter stops retrying afterwards.
    ConnectFailed,
    /// A decoded server-pushed event
    Event(ServerEvent),
}

/// Connection phase as observed through channel signals.
///
/// Exposed to the presentation layer as a visible status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// Attempting the initial connection
    #[default]
    Connecting,
    /// Transport is up
    Connected,
    /// Transport dropped, adapter is retrying
    Disconnected,
    /// Retry budget exhausted; no further attempts
    Failed,
}

impl ConnectionStatus {
    /// Whether the terminal failure state has been reached
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Failed)
    }
}

//! Notification dispatcher
//!
//! Decides *when* to fire sound and OS notification side effects, exactly
//! once per qualifying message, and owns the unread counter. The actual
//! playback and notification primitives live behind [`Notifier`]; both are
//! best-effort and must never block or propagate failures.
//!
//! Only broadcast messages qualify. Private messages append to the log
//! without sound or notification: intentional asymmetry inherited from
//! the product design.

use chat_core::ChatMessage;

/// Best-effort notification sink.
///
/// Implementations swallow all failures (autoplay rejection, missing
/// permission, etc.); at most they log. Permission acquisition is an
/// application-init concern, not part of this trait.
pub trait Notifier: Send {
    /// Play the new-message sound
    fn play_sound(&self);

    /// Raise an OS notification with the sender as title
    fn show_notification(&self, title: &str, body: &str);
}

/// Notifier that only writes tracing events.
///
/// Stands in for platform sound/notification primitives in headless runs
/// and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn play_sound(&self) {
        tracing::debug!("Notification sound");
    }

    fn show_notification(&self, title: &str, body: &str) {
        tracing::debug!(title, body, "OS notification");
    }
}

/// Drives side effects for newly appended broadcast messages
pub struct NotificationDispatcher {
    notifier: Box<dyn Notifier>,
    focused: bool,
    unread: u32,
}

impl NotificationDispatcher {
    /// Create a dispatcher; the window starts focused
    #[must_use]
    pub fn new(notifier: Box<dyn Notifier>) -> Self {
        Self {
            notifier,
            focused: true,
            unread: 0,
        }
    }

    /// React to a freshly appended broadcast message.
    ///
    /// Fires sound and OS notification once, and counts the message as
    /// unread while the window lacks focus.
    pub fn on_broadcast(&mut self, message: &ChatMessage) {
        self.notifier.play_sound();
        self.notifier.show_notification(&message.sender, &message.message);

        if !self.focused {
            self.unread += 1;
        }
    }

    /// Track window focus. Gaining focus resets the unread counter
    /// unconditionally, regardless of how many messages accumulated.
    pub fn set_focused(&mut self, focused: bool) {
        if focused {
            self.unread = 0;
        }
        self.focused = focused;
    }

    /// Current focus state
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Broadcast messages received while unfocused since the last focus gain
    #[inline]
    pub fn unread_count(&self) -> u32 {
        self.unread
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("focused", &self.focused)
            .field("unread", &self.unread)
            .finish()
    }
}

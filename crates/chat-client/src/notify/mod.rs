//! Notification side effects and unread counting

mod dispatcher;

pub use dispatcher::{NotificationDispatcher, Notifier, TracingNotifier};

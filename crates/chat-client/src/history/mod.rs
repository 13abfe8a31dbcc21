//! Session-scoped message history

mod message_log;

pub use message_log::MessageLog;

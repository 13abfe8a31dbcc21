//! # chat-core
//!
//! Domain layer containing entities, value objects, and the inbound/outbound
//! event types spoken over the relay channel.
//! This crate has zero dependencies on infrastructure (transport, runtime, etc.).

pub mod entities;
pub mod events;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ChatMessage, OnlineUser};
pub use events::{ClientCommand, EventDecodeError, ServerEvent, WireMessage};
pub use value_objects::{MessageKey, UserId};

//! Value objects - small immutable identifiers

mod message_key;
mod user_id;

pub use message_key::MessageKey;
pub use user_id::UserId;

//! Domain entities

mod message;
mod user;

pub use message::ChatMessage;
pub use user::OnlineUser;

//! Channel event types
//!
//! Inbound server events, outbound client commands, and the JSON wire
//! envelope both travel in.

mod client_command;
mod server_event;
mod wire;

pub use client_command::ClientCommand;
pub use server_event::{EventDecodeError, ServerEvent};
pub use wire::WireMessage;

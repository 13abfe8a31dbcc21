//! Relay channel
//!
//! Abstract duplex event channel plus the WebSocket implementation.

mod adapter;
mod websocket;

pub use adapter::{ChannelSignal, ConnectionStatus, EventChannel};
pub use websocket::WsChannel;

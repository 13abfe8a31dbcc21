//! WebSocket channel adapter
//!
//! Owns the connection lifecycle: initial connect, bounded reconnect with a
//! fixed inter-attempt delay, frame encode/decode, and lifecycle signals.
//! Failures never reach the caller as errors; they degrade to signals.

use chat_common::ClientConfig;
use chat_core::{ClientCommand, ServerEvent, WireMessage};
use futures_util::{Sink, SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use super::adapter::{ChannelSignal, EventChannel};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket implementation of the relay channel.
///
/// Spawning starts a background driver task that connects with bounded
/// retry (`max_attempts` spaced by `delay_ms`, no backoff, no jitter) and
/// re-enters the same retry loop after a mid-session drop. Once the budget
/// is exhausted a terminal [`ChannelSignal::ConnectFailed`] is emitted
/// exactly once and the task exits.
pub struct WsChannel {
    outbound_tx: mpsc::UnboundedSender<ClientCommand>,
}

impl WsChannel {
    /// Start the channel driver and return the adapter plus its signal stream
    #[must_use]
    pub fn spawn(config: ClientConfig) -> (Self, mpsc::UnboundedReceiver<ChannelSignal>) {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (signal_tx, signal_rx) = mpsc::unbounded_channel();

        tokio::spawn(Self::drive(config, outbound_rx, signal_tx));

        (Self { outbound_tx }, signal_rx)
    }

    /// Connection driver: connect, pump frames, reconnect on drop
    async fn drive(
        config: ClientConfig,
        mut outbound_rx: mpsc::UnboundedReceiver<ClientCommand>,
        signal_tx: mpsc::UnboundedSender<ChannelSignal>,
    ) {
        'session: loop {
            let ws = match Self::connect_with_retry(&config).await {
                Some(ws) => ws,
                None => {
                    tracing::error!(
                        attempts = config.reconnect.max_attempts,
                        "Reconnect budget exhausted, giving up"
                    );
                    let _ = signal_tx.send(ChannelSignal::ConnectFailed);
                    return;
                }
            };

            let _ = signal_tx.send(ChannelSignal::Connected);
            let (mut sink, mut stream) = ws.split();

            loop {
                tokio::select! {
                    command = outbound_rx.recv() => match command {
                        Some(command) => {
                            if !Self::transmit(&mut sink, &command).await {
                                let _ = signal_tx.send(ChannelSignal::Disconnected);
                                continue 'session;
                            }
                        }
                        // Owner dropped the adapter; tear down quietly
                        None => return,
                    },
                    frame = stream.next() => match frame {
                        Some(Ok(Message::Text(text))) => {
                            if let Some(event) = Self::decode(&text) {
                                let _ = signal_tx.send(ChannelSignal::Event(event));
                            }
                        }
                        Some(Ok(Message::Ping(_) | Message::Pong(_) | Message::Binary(_) | Message::Frame(_))) => {}
                        Some(Ok(Message::Close(_))) | None => {
                            tracing::info!("Relay closed the connection");
                            let _ = signal_tx.send(ChannelSignal::Disconnected);
                            continue 'session;
                        }
                        Some(Err(e)) => {
                            tracing::warn!(error = %e, "WebSocket read failed");
                            let _ = signal_tx.send(ChannelSignal::Disconnected);
                            continue 'session;
                        }
                    },
                }
            }
        }
    }

    /// Attempt the connection up to the configured budget
    async fn connect_with_retry(config: &ClientConfig) -> Option<WsStream> {
        let max_attempts = config.reconnect.max_attempts;

        for attempt in 1..=max_attempts {
            match connect_async(config.server_url.as_str()).await {
                Ok((ws, _response)) => {
                    tracing::info!(url = %config.server_url, attempt, "Connected to relay");
                    return Some(ws);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "Connection attempt failed"
                    );
                    if attempt < max_attempts {
                        tokio::time::sleep(config.reconnect.delay()).await;
                    }
                }
            }
        }

        None
    }

    /// Encode and send one command; false means the transport dropped
    async fn transmit(
        sink: &mut (impl Sink<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin),
        command: &ClientCommand,
    ) -> bool {
        let text = match command.to_wire().to_json() {
            Ok(text) => text,
            Err(e) => {
                // Encode failures are local bugs, not transport drops
                tracing::warn!(command = %command, error = %e, "Failed to encode command");
                return true;
            }
        };

        match sink.send(Message::Text(text)).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(command = %command, error = %e, "WebSocket write failed");
                false
            }
        }
    }

    /// Decode one inbound text frame; malformed or unknown frames are dropped
    fn decode(text: &str) -> Option<ServerEvent> {
        let wire = match WireMessage::from_json(text) {
            Ok(wire) => wire,
            Err(e) => {
                tracing::warn!(error = %e, "Dropping malformed frame");
                return None;
            }
        };

        match ServerEvent::decode(&wire) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(event = %wire.event, error = %e, "Dropping undecodable event");
                None
            }
        }
    }
}

impl EventChannel for WsChannel {
    fn send(&self, command: ClientCommand) {
        // Fire-and-forget: a closed driver means the terminal failure
        // signal already went out, so the command is silently dropped.
        if self.outbound_tx.send(command).is_err() {
            tracing::debug!("Channel driver gone, command dropped");
        }
    }
}

impl std::fmt::Debug for WsChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WsChannel")
            .field("driver_alive", &!self.outbound_tx.is_closed())
            .finish()
    }
}

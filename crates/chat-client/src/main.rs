//! Chat client entry point
//!
//! Headless driver: first stdin line registers the username, later lines
//! are sent as messages (`/quit` exits). Inbound traffic is reported
//! through tracing; a real presentation layer would read the same derived
//! state from [`ChatClient`].
//!
//! Run with:
//! ```bash
//! cargo run -p chat-client
//! ```
//!
//! Configuration is loaded from environment variables.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chat_client::{ChatClient, ConnectionStatus, TracingNotifier, WsChannel};
use chat_common::{try_init_tracing, ClientConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the client
    if let Err(e) = run().await {
        error!(error = %e, "Client failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting chat client...");

    // Load configuration
    let config = ClientConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        url = %config.server_url,
        attempts = config.reconnect.max_attempts,
        delay_ms = config.reconnect.delay_ms,
        "Configuration loaded"
    );

    let (channel, mut signals) = WsChannel::spawn(config);
    let mut client = ChatClient::new(Arc::new(channel), Box::new(TracingNotifier));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut upkeep = tokio::time::interval(Duration::from_millis(500));
    let mut seen = 0;

    info!("Enter a username to join");

    loop {
        tokio::select! {
            signal = signals.recv() => match signal {
                Some(signal) => {
                    client.handle_signal(signal);
                    report(&client, &mut seen);
                    if client.connection_status().is_terminal() {
                        anyhow::bail!("connection failed after exhausting retries");
                    }
                }
                // Adapter driver gone without a terminal signal: shutdown
                None => break,
            },
            line = lines.next_line() => match line? {
                Some(line) if line == "/quit" => break,
                Some(line) => {
                    if client.username().is_none() {
                        if client.register(&line) {
                            info!(username = line.trim(), "Joined");
                        }
                    } else if !client.submit_message(&line) {
                        info!("Nothing to send");
                    }
                }
                None => break,
            },
            _ = upkeep.tick() => client.tick(Instant::now()),
        }
    }

    info!("Client shut down");
    Ok(())
}

/// Log messages appended since the last report
fn report(client: &ChatClient, seen: &mut usize) {
    for message in &client.messages()[*seen..] {
        if message.is_private {
            info!(sender = %message.sender, text = %message.message, "(private)");
        } else {
            info!(sender = %message.sender, text = %message.message, "");
        }
    }
    *seen = client.messages().len();

    let typing = client.typing_display();
    if !typing.is_empty() {
        info!(users = ?typing, "typing...");
    }

    if client.connection_status() == ConnectionStatus::Disconnected {
        info!("Reconnecting...");
    }
}

//! Client configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Relay server endpoint (WebSocket URL)
    pub server_url: String,
    pub reconnect: ReconnectConfig,
}

/// Reconnection policy
///
/// Bounded retry with a fixed inter-attempt delay. No exponential backoff,
/// no jitter: intentional simplicity tradeoff for a low-traffic chat relay.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconnectConfig {
    #[serde(default = "default_reconnect_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_reconnect_delay_ms")]
    pub delay_ms: u64,
}

impl ReconnectConfig {
    /// Inter-attempt delay as a `Duration`
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_reconnect_attempts(),
            delay_ms: default_reconnect_delay_ms(),
        }
    }
}

// Default value functions
fn default_server_url() -> String {
    "ws://127.0.0.1:3000/ws".to_string()
}

fn default_reconnect_attempts() -> u32 {
    5
}

fn default_reconnect_delay_ms() -> u64 {
    1000
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but unparseable
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server_url: env::var("CHAT_SERVER_URL").unwrap_or_else(|_| default_server_url()),
            reconnect: ReconnectConfig {
                max_attempts: parse_var("CHAT_RECONNECT_ATTEMPTS", default_reconnect_attempts)?,
                delay_ms: parse_var("CHAT_RECONNECT_DELAY_MS", default_reconnect_delay_ms)?,
            },
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            reconnect: ReconnectConfig::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    default: fn() -> T,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

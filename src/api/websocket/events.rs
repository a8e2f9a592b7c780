//! WebSocket frame types for the roster feed

use serde::{Deserialize, Serialize};

pub use crate::roster::RosterEvent;
use crate::types::HeroSnapshot;

/// WebSocket message wrapper with metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WsMessage {
    #[serde(flatten)]
    pub event: RosterEvent,

    /// Monotonically increasing sequence ID for gap detection
    pub sequence_id: u64,

    /// Unix timestamp when the event was published
    pub timestamp: i64,
}

/// Client message types
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Heartbeat
    Ping,
}

/// First frame sent on every connection.
///
/// `heroes` is the roster exactly as it stood after event `sequence_id`;
/// the client applies only events numbered above it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WelcomeMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub sequence_id: u64,
    pub server_version: String,
    pub heroes: Vec<HeroSnapshot>,
}

impl WelcomeMessage {
    pub fn new(sequence_id: u64, heroes: Vec<HeroSnapshot>) -> Self {
        Self {
            msg_type: "welcome".to_string(),
            sequence_id,
            server_version: crate::VERSION.to_string(),
            heroes,
        }
    }
}

/// Reply to a client ping
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub timestamp: i64,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            msg_type: "pong".to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Sent when a client fell behind and events were dropped for it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaggedMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub code: String,
    pub missed: u64,
    pub message: String,
}

impl LaggedMessage {
    pub fn new(missed: u64) -> Self {
        Self {
            msg_type: "error".to_string(),
            code: "lagged".to_string(),
            missed,
            message: format!("Missed {} events, reconnect to resync", missed),
        }
    }
}

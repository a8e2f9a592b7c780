//! WebSocket feed of roster changes
//!
//! Provides the `/ws` endpoint. Every successful mutation is pushed to all
//! connected clients with a sequence ID so they can detect gaps and resync.

pub mod events;
pub mod feed;
pub mod handler;

pub use events::{RosterEvent, WsMessage};
pub use feed::EventFeed;
pub use handler::ws_handler;

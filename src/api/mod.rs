//! API module for HTTP and WebSocket endpoints
//!
//! Thin transport over [`crate::roster::HeroRoster`]: handlers decode the
//! request, run one roster operation and encode its outcome.

pub mod http;
pub mod rest;
pub mod state;
pub mod websocket;

pub use http::create_router;
pub use state::AppState;

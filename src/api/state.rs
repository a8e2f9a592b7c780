//! Shared application state for the HTTP and WebSocket handlers

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::error;

use super::rest::ApiError;
use super::websocket::{EventFeed, WsMessage};
use crate::error::RosterResult;
use crate::roster::{HeroRoster, RosterListener};

/// Buffered events per subscriber; slower clients are told to resync
const EVENT_CAPACITY: usize = 1024;

/// State injected into every handler via axum's `State` extractor
pub struct AppState {
    /// The roster all requests operate on
    pub roster: Arc<HeroRoster>,

    /// Sequenced feed of roster events, fed by the roster itself
    pub feed: Arc<EventFeed>,
}

impl AppState {
    /// Wrap `roster`, attaching a fresh event feed as its listener
    pub fn new(roster: HeroRoster) -> Self {
        let feed = Arc::new(EventFeed::new(EVENT_CAPACITY));
        let listener: Arc<dyn RosterListener> = Arc::clone(&feed) as _;

        Self {
            roster: Arc::new(roster.with_listener(listener)),
            feed,
        }
    }

    /// Run a roster operation on the blocking pool.
    ///
    /// Operations may wait up to the store's acquire timeout, which must not
    /// happen on an async worker thread.
    pub async fn with_roster<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&HeroRoster) -> RosterResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let roster = Arc::clone(&self.roster);
        match tokio::task::spawn_blocking(move || op(roster.as_ref())).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(e) => {
                error!(error = %e, "roster task failed");
                Err(ApiError::internal("roster operation failed"))
            }
        }
    }

    /// Sequence ID of the most recently published event (0 before any)
    pub fn current_sequence_id(&self) -> u64 {
        self.feed.current_sequence_id()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WsMessage> {
        self.feed.subscribe()
    }
}

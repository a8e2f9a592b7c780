//! Sequenced broadcast of roster events

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;

use super::events::WsMessage;
use crate::roster::{RosterEvent, RosterListener};

/// Numbers roster events and fans them out to every subscriber.
///
/// Attached to the roster as its listener, so `publish` runs while the
/// mutation's store handle is still held and sequence IDs follow the order
/// in which changes were applied.
#[derive(Debug)]
pub struct EventFeed {
    tx: broadcast::Sender<WsMessage>,
    sequence: AtomicU64,
}

impl EventFeed {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            sequence: AtomicU64::new(0),
        }
    }

    /// Stamp `event` with the next sequence ID and send it, returning the ID
    pub fn publish(&self, event: RosterEvent) -> u64 {
        let sequence_id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let msg = WsMessage {
            event,
            sequence_id,
            timestamp: chrono::Utc::now().timestamp(),
        };

        // Err only means nobody is listening
        let _ = self.tx.send(msg);
        sequence_id
    }

    /// Sequence ID of the most recently published event (0 before any)
    pub fn current_sequence_id(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WsMessage> {
        self.tx.subscribe()
    }
}

impl RosterListener for EventFeed {
    fn on_event(&self, event: RosterEvent) {
        self.publish(event);
    }
}

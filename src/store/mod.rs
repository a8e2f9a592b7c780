//! Roster Store - exclusive, bounded-wait access to the hero map
//!
//! The store owns the only copy of the roster. Every read and every
//! read-modify-write goes through [`RosterStore::acquire`], which hands out a
//! [`RosterHandle`] or gives up after the configured timeout. The handle
//! releases the roster when dropped, so early returns and `?` cannot leak it.
//!
//! The store enforces no business rules; see [`crate::roster`] for those.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use tracing::warn;

use crate::error::{RosterError, RosterResult};
use crate::types::Hero;

/// Default bound on how long a caller waits for the roster
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Hero name -> hero record, living heroes and tombstones alike
pub type Roster = BTreeMap<String, Hero>;

/// Owner of the shared roster
pub struct RosterStore {
    roster: Mutex<Roster>,
    timeout: Duration,
}

impl RosterStore {
    /// Create an empty store with the default acquire timeout
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_ACQUIRE_TIMEOUT)
    }

    /// Create an empty store that waits at most `timeout` for access
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            roster: Mutex::new(Roster::new()),
            timeout,
        }
    }

    /// How long [`acquire`](Self::acquire) waits before giving up
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Obtain exclusive access to the roster.
    ///
    /// Blocks for at most [`timeout`](Self::timeout). On timeout the roster
    /// has not been touched and the caller gets
    /// [`RosterError::ResourceUnavailable`].
    pub fn acquire(&self) -> RosterResult<RosterHandle<'_>> {
        match self.roster.try_lock_for(self.timeout) {
            Some(guard) => Ok(RosterHandle { guard }),
            None => {
                warn!(timeout = ?self.timeout, "roster acquire timed out");
                Err(RosterError::ResourceUnavailable {
                    timeout: self.timeout,
                })
            }
        }
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RosterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterStore")
            .field("timeout", &self.timeout)
            .field("locked", &self.roster.is_locked())
            .finish()
    }
}

/// Exclusive access to the roster, released on drop
pub struct RosterHandle<'a> {
    guard: MutexGuard<'a, Roster>,
}

impl RosterHandle<'_> {
    /// Give the roster back to the next waiter.
    ///
    /// Equivalent to dropping the handle.
    pub fn release(self) {
        drop(self);
    }
}

impl Deref for RosterHandle<'_> {
    type Target = Roster;

    fn deref(&self) -> &Roster {
        &self.guard
    }
}

impl DerefMut for RosterHandle<'_> {
    fn deref_mut(&mut self) -> &mut Roster {
        &mut self.guard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_acquire_and_mutate() {
        let store = RosterStore::new();
        {
            let mut roster = store.acquire().unwrap();
            roster.insert("Atlas".to_string(), Hero::new("Atlas".to_string(), 10));
        }

        let roster = store.acquire().unwrap();
        assert_eq!(roster.get("Atlas").map(|h| h.power_level), Some(10));
    }

    #[test]
    fn test_release_lets_next_caller_in() {
        let store = RosterStore::with_timeout(Duration::from_millis(50));
        let handle = store.acquire().unwrap();
        handle.release();
        assert!(store.acquire().is_ok());
    }

    #[test]
    fn test_acquire_times_out_while_held() {
        let store = Arc::new(RosterStore::with_timeout(Duration::from_millis(50)));
        let (locked_tx, locked_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel::<()>();

        let holder = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let _handle = store.acquire().unwrap();
                locked_tx.send(()).unwrap();
                done_rx.recv().unwrap();
            })
        };

        locked_rx.recv().unwrap();
        let started = Instant::now();
        let err = store.acquire().err().unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
        assert_eq!(
            err,
            RosterError::ResourceUnavailable {
                timeout: Duration::from_millis(50)
            }
        );

        done_tx.send(()).unwrap();
        holder.join().unwrap();
        assert!(store.acquire().is_ok());
    }

    #[test]
    fn test_stores_are_independent() {
        let first = RosterStore::new();
        let second = RosterStore::new();

        let _held = first.acquire().unwrap();
        let mut other = second.acquire().unwrap();
        other.insert("Zeta".to_string(), Hero::new("Zeta".to_string(), 1));
        drop(other);

        assert!(second.acquire().unwrap().contains_key("Zeta"));
    }
}

//! Hero Roster Server
//!
//! Tracks a roster of heroes behind a small HTTP API: create, fetch, rest,
//! kill, retire, and send groups of heroes against calamities.
//!
//! # Features
//!
//! - **Bounded-wait store**: one exclusive roster handle, acquired with a
//!   timeout; contention surfaces as a retryable error instead of a hang
//! - **Atomic operations**: every operation validates first and mutates last,
//!   so a failure never leaves partial changes
//! - **Name tombstones**: dead heroes stay on the roster forever and their
//!   names can never be reused; retired heroes free theirs
//! - **Live feed**: WebSocket stream of roster changes
//!
//! # Modules
//!
//! - `types`: Hero and calamity records
//! - `error`: The closed set of roster errors
//! - `store`: Exclusive, bounded-wait access to the hero map
//! - `roster`: The six roster operations plus listing
//! - `validation`: Request checks run before the store is touched
//! - `config`: Environment configuration
//! - `api`: Axum REST and WebSocket endpoints
//! - `server`: Listener and shutdown handling
//!
//! # Example
//!
//! ```
//! use hero_roster::{Calamity, HeroRoster, NewHero};
//!
//! let roster = HeroRoster::default();
//! roster.create_hero(NewHero::new("Atlas", 10)).unwrap();
//!
//! let report = roster.resolve_calamity(Calamity::new(10, ["Atlas"])).unwrap();
//! assert_eq!(report.heroes[0].exhaustion, 1);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod roster;
pub mod server;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::{AppConfig, RosterConfig, ServerConfig};
pub use error::{RosterError, RosterResult};
pub use roster::{HeroRoster, RosterEvent, RosterListener};
pub use store::{RosterHandle, RosterStore};
pub use types::{Calamity, CalamityReport, CalamityRule, Hero, HeroSnapshot, NewHero};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

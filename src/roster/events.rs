//! Roster change notifications

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CalamityReport, HeroSnapshot};

/// A mutation that was applied to the roster
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RosterEvent {
    /// A new hero joined the roster
    HeroCreated { hero: HeroSnapshot },

    /// A hero recovered one point of exhaustion
    HeroRested { hero: HeroSnapshot },

    /// A hero was killed; the name is now retired forever
    HeroKilled { hero: HeroSnapshot },

    /// A living hero left the roster and freed the name
    HeroRetired { name: String },

    /// A calamity was resolved by a group of heroes
    CalamityResolved { report: CalamityReport },
}

/// Receives every applied mutation while the roster is still held.
///
/// Listeners therefore see changes in exactly the order they were applied.
/// Implementations must not block and must not call back into the roster.
pub trait RosterListener: Send + Sync + fmt::Debug {
    fn on_event(&self, event: RosterEvent);
}

//! Hero types for the roster

use serde::{Deserialize, Serialize};

/// A hero record as stored in the roster
///
/// Dead heroes stay in the roster as tombstones so their names can never be
/// taken again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub name: String,
    pub power_level: u32,
    pub exhaustion: u32,
    pub alive: bool,
}

impl Hero {
    /// Create a fresh, living hero with no exhaustion
    pub fn new(name: String, power_level: u32) -> Self {
        Self {
            name,
            power_level,
            exhaustion: 0,
            alive: true,
        }
    }

    /// Add one point of exhaustion, killing the hero when it reaches `max_exhaustion`.
    ///
    /// Returns `true` if this call killed the hero.
    pub fn exert(&mut self, max_exhaustion: u32) -> bool {
        self.exhaustion = (self.exhaustion + 1).min(max_exhaustion);
        if self.exhaustion == max_exhaustion {
            self.alive = false;
            return true;
        }
        false
    }

    /// Point-in-time copy of this hero for callers outside the store
    pub fn snapshot(&self) -> HeroSnapshot {
        HeroSnapshot {
            power_level: self.power_level,
            exhaustion: self.exhaustion,
            name: self.name.clone(),
            alive: self.alive,
        }
    }
}

/// Serializable view of a hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSnapshot {
    pub power_level: u32,
    pub exhaustion: u32,
    pub name: String,
    pub alive: bool,
}

/// Request body for creating a hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHero {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "PowerLevel")]
    pub power_level: u32,
}

impl NewHero {
    pub fn new(name: impl Into<String>, power_level: u32) -> Self {
        Self {
            name: name.into(),
            power_level,
        }
    }
}

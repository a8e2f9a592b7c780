//! Hero Roster - the business operations over the store
//!
//! Every operation validates its input, acquires the [`RosterStore`] once,
//! checks the domain rules against the current state and only then applies
//! its mutation. A failed operation leaves the roster exactly as it found it.
//! A successful mutation is reported to the attached [`RosterListener`]
//! before the store is released.

mod calamity;
mod crud;
mod events;

use std::sync::Arc;

pub use events::{RosterEvent, RosterListener};

use crate::config::RosterConfig;
use crate::error::RosterResult;
use crate::store::{Roster, RosterStore};
use crate::types::{Calamity, CalamityReport, CalamityRule, HeroSnapshot, NewHero};

/// Default exhaustion at which a hero dies
pub const DEFAULT_MAX_EXHAUSTION: u32 = 10;

/// The roster of heroes and the rules that govern it
#[derive(Debug)]
pub struct HeroRoster {
    pub(crate) store: RosterStore,
    pub(crate) max_exhaustion: u32,
    pub(crate) calamity_rule: CalamityRule,
    listener: Option<Arc<dyn RosterListener>>,
}

impl HeroRoster {
    /// Create a roster over `store`; heroes die when exhaustion reaches `max_exhaustion`
    pub fn new(store: RosterStore, max_exhaustion: u32) -> Self {
        Self {
            store,
            // A cap of zero would mean heroes are born dead
            max_exhaustion: max_exhaustion.max(1),
            calamity_rule: CalamityRule::default(),
            listener: None,
        }
    }

    /// Create an empty roster from configuration
    pub fn from_config(config: &RosterConfig) -> Self {
        Self::new(
            RosterStore::with_timeout(config.acquire_timeout),
            config.max_exhaustion,
        )
        .with_calamity_rule(config.calamity_rule)
    }

    /// Use `rule` to judge calamities
    pub fn with_calamity_rule(mut self, rule: CalamityRule) -> Self {
        self.calamity_rule = rule;
        self
    }

    /// Report every applied mutation to `listener`
    pub fn with_listener(mut self, listener: Arc<dyn RosterListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Run `read` against the whole roster under a single acquisition.
    ///
    /// Nothing can be applied, and so nothing reported, while `read` runs.
    pub fn observe<R>(&self, read: impl FnOnce(&Roster) -> R) -> RosterResult<R> {
        let heroes = self.store.acquire()?;
        Ok(read(&*heroes))
    }

    /// Hand an event to the listener. Callers still hold the store handle.
    pub(crate) fn notify(&self, event: impl FnOnce() -> RosterEvent) {
        if let Some(listener) = &self.listener {
            listener.on_event(event());
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn max_exhaustion(&self) -> u32 {
        self.max_exhaustion
    }

    pub fn calamity_rule(&self) -> CalamityRule {
        self.calamity_rule
    }
}

impl Default for HeroRoster {
    fn default() -> Self {
        Self::new(RosterStore::new(), DEFAULT_MAX_EXHAUSTION)
    }
}

impl HeroRoster {
    // Hero lifecycle (from crud.rs)
    pub fn create_hero(&self, hero: NewHero) -> RosterResult<HeroSnapshot> {
        crud::create_hero(self, hero)
    }

    pub fn get_hero(&self, name: &str) -> RosterResult<HeroSnapshot> {
        crud::get_hero(self, name)
    }

    pub fn list_heroes(&self) -> RosterResult<Vec<HeroSnapshot>> {
        crud::list_heroes(self)
    }

    pub fn rest_hero(&self, name: &str) -> RosterResult<HeroSnapshot> {
        crud::rest_hero(self, name)
    }

    pub fn kill_hero(&self, name: &str) -> RosterResult<HeroSnapshot> {
        crud::kill_hero(self, name)
    }

    pub fn retire_hero(&self, name: &str) -> RosterResult<HeroSnapshot> {
        crud::retire_hero(self, name)
    }

    // Calamities (from calamity.rs)
    pub fn resolve_calamity(&self, calamity: Calamity) -> RosterResult<CalamityReport> {
        calamity::resolve_calamity(self, calamity)
    }
}

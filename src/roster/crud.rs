//! Hero lifecycle operations: create, fetch, list, rest, kill, retire

use tracing::{debug, info};

use crate::error::{RosterError, RosterResult};
use crate::store::Roster;
use crate::types::{Hero, HeroSnapshot, NewHero};
use crate::validation::validate_name;

use super::{HeroRoster, RosterEvent};

/// Look up a living hero for mutation, mapping a dead one to `if_dead`
fn living_hero_mut<'a>(
    heroes: &'a mut Roster,
    name: &str,
    if_dead: fn(String) -> RosterError,
) -> RosterResult<&'a mut Hero> {
    let hero = heroes
        .get_mut(name)
        .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
    if !hero.alive {
        return Err(if_dead(name.to_string()));
    }
    Ok(hero)
}

/// Add a new living hero. The name must never have been held by a dead hero.
pub fn create_hero(roster: &HeroRoster, new_hero: NewHero) -> RosterResult<HeroSnapshot> {
    validate_name(&new_hero.name)?;

    let mut heroes = roster.store.acquire()?;
    if let Some(existing) = heroes.get(&new_hero.name) {
        return Err(if existing.alive {
            RosterError::AlreadyExists(new_hero.name)
        } else {
            RosterError::NameRetired(new_hero.name)
        });
    }

    let hero = Hero::new(new_hero.name, new_hero.power_level);
    let snapshot = hero.snapshot();
    heroes.insert(hero.name.clone(), hero);
    roster.notify(|| RosterEvent::HeroCreated {
        hero: snapshot.clone(),
    });
    drop(heroes);

    info!(hero = %snapshot.name, power_level = snapshot.power_level, "hero created");
    Ok(snapshot)
}

/// Read-only lookup of a single hero, dead or alive
pub fn get_hero(roster: &HeroRoster, name: &str) -> RosterResult<HeroSnapshot> {
    roster
        .observe(|heroes| heroes.get(name).map(Hero::snapshot))?
        .ok_or_else(|| RosterError::NotFound(name.to_string()))
}

/// Every record on the roster, tombstones included, ordered by name
pub fn list_heroes(roster: &HeroRoster) -> RosterResult<Vec<HeroSnapshot>> {
    let listed: Vec<HeroSnapshot> =
        roster.observe(|heroes| heroes.values().map(Hero::snapshot).collect())?;

    debug!(count = listed.len(), "listed heroes");
    Ok(listed)
}

/// Recover one point of exhaustion
pub fn rest_hero(roster: &HeroRoster, name: &str) -> RosterResult<HeroSnapshot> {
    let mut heroes = roster.store.acquire()?;
    let hero = living_hero_mut(&mut heroes, name, RosterError::NotAlive)?;
    if hero.exhaustion == 0 {
        return Err(RosterError::NoRestNeeded(name.to_string()));
    }
    hero.exhaustion -= 1;
    let snapshot = hero.snapshot();
    roster.notify(|| RosterEvent::HeroRested {
        hero: snapshot.clone(),
    });
    drop(heroes);

    info!(hero = name, exhaustion = snapshot.exhaustion, "hero rested");
    Ok(snapshot)
}

/// Mark a living hero dead. The record stays as a tombstone.
pub fn kill_hero(roster: &HeroRoster, name: &str) -> RosterResult<HeroSnapshot> {
    let mut heroes = roster.store.acquire()?;
    let hero = living_hero_mut(&mut heroes, name, RosterError::AlreadyDead)?;
    hero.alive = false;
    let snapshot = hero.snapshot();
    roster.notify(|| RosterEvent::HeroKilled {
        hero: snapshot.clone(),
    });
    drop(heroes);

    info!(hero = name, "hero killed");
    Ok(snapshot)
}

/// Remove a living hero from the roster, freeing the name
pub fn retire_hero(roster: &HeroRoster, name: &str) -> RosterResult<HeroSnapshot> {
    let mut heroes = roster.store.acquire()?;
    living_hero_mut(&mut heroes, name, RosterError::CannotRetireDead)?;
    let retired = heroes
        .remove(name)
        .map(|hero| hero.snapshot())
        .ok_or_else(|| RosterError::NotFound(name.to_string()))?;
    roster.notify(|| RosterEvent::HeroRetired {
        name: retired.name.clone(),
    });
    drop(heroes);

    info!(hero = name, "hero retired");
    Ok(retired)
}

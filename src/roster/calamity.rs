//! Calamity resolution
//!
//! A calamity is all-or-nothing: every named hero is checked, and the power
//! rule evaluated, before a single hero is touched.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::{RosterError, RosterResult};
use crate::types::{Calamity, CalamityReport};
use crate::validation::validate_calamity;

use super::{HeroRoster, RosterEvent};

/// Send the named heroes against a calamity.
///
/// Power is summed over the list as given, so a hero named twice counts
/// twice. On success every distinct participant gains one point of
/// exhaustion, and those who reach the cap die.
pub fn resolve_calamity(roster: &HeroRoster, calamity: Calamity) -> RosterResult<CalamityReport> {
    validate_calamity(&calamity)?;

    let Calamity {
        power_level: required_power,
        heroes: named,
    } = calamity;

    let mut heroes = roster.store.acquire()?;

    // Names that can never be on the roster (empty, too long) fall out here
    // as unknown heroes, in list order
    let mut total_power: u64 = 0;
    for name in &named {
        let hero = heroes
            .get(name)
            .ok_or_else(|| RosterError::UnknownHero(name.clone()))?;
        if !hero.alive {
            return Err(RosterError::DeadHero(name.clone()));
        }
        total_power += u64::from(hero.power_level);
    }

    if !roster.calamity_rule.is_satisfied(required_power, total_power) {
        debug!(
            required_power,
            total_power,
            rule = ?roster.calamity_rule,
            "calamity not resolved"
        );
        return Err(RosterError::InsufficientPower {
            required: required_power,
            available: total_power,
        });
    }

    let mut seen = HashSet::with_capacity(named.len());
    let mut snapshots = Vec::with_capacity(named.len());
    let mut fallen = Vec::new();
    for name in named {
        if !seen.insert(name.clone()) {
            continue;
        }
        // Presence was checked above under the same handle
        if let Some(hero) = heroes.get_mut(&name) {
            if hero.exert(roster.max_exhaustion) {
                fallen.push(name);
            }
            snapshots.push(hero.snapshot());
        }
    }

    let report = CalamityReport {
        required_power,
        total_power,
        heroes: snapshots,
        fallen,
    };
    roster.notify(|| RosterEvent::CalamityResolved {
        report: report.clone(),
    });
    drop(heroes);

    info!(
        required_power,
        total_power,
        heroes = report.heroes.len(),
        fallen = report.fallen.len(),
        "calamity resolved"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RosterStore;
    use crate::types::{CalamityRule, HeroSnapshot, NewHero};

    fn roster_with(heroes: &[(&str, u32)], max_exhaustion: u32) -> HeroRoster {
        let roster = HeroRoster::new(RosterStore::new(), max_exhaustion);
        for (name, power) in heroes {
            roster.create_hero(NewHero::new(*name, *power)).unwrap();
        }
        roster
    }

    fn snapshot_all(roster: &HeroRoster) -> Vec<HeroSnapshot> {
        roster.list_heroes().unwrap()
    }

    #[test]
    fn test_resolve_exhausts_every_participant() {
        let roster = roster_with(&[("Atlas", 6), ("Zeta", 4), ("Idle", 1)], 10);

        let report = roster
            .resolve_calamity(Calamity::new(10, ["Atlas", "Zeta"]))
            .unwrap();
        assert_eq!(report.total_power, 10);
        assert!(report.fallen.is_empty());
        assert!(report.heroes.iter().all(|h| h.exhaustion == 1));

        assert_eq!(roster.get_hero("Idle").unwrap().exhaustion, 0);
    }

    #[test]
    fn test_empty_hero_list() {
        let roster = roster_with(&[], 10);
        assert_eq!(
            roster.resolve_calamity(Calamity::new(1, Vec::<String>::new())),
            Err(RosterError::EmptyHeroList)
        );
    }

    #[test]
    fn test_empty_hero_list_does_not_wait_for_store() {
        let roster = HeroRoster::new(
            RosterStore::with_timeout(std::time::Duration::from_millis(10)),
            10,
        );
        let _held = roster.store.acquire().unwrap();
        assert_eq!(
            roster.resolve_calamity(Calamity::new(1, Vec::<String>::new())),
            Err(RosterError::EmptyHeroList)
        );
    }

    #[test]
    fn test_first_offending_name_is_reported() {
        let roster = roster_with(&[("Atlas", 5), ("Fallen", 5)], 10);
        roster.kill_hero("Fallen").unwrap();

        assert_eq!(
            roster.resolve_calamity(Calamity::new(5, ["Atlas", "Ghost", "Fallen"])),
            Err(RosterError::UnknownHero("Ghost".to_string()))
        );
        assert_eq!(
            roster.resolve_calamity(Calamity::new(5, ["Atlas", "Fallen", "Ghost"])),
            Err(RosterError::DeadHero("Fallen".to_string()))
        );
    }

    #[test]
    fn test_failure_leaves_roster_untouched() {
        let roster = roster_with(&[("Atlas", 5), ("Zeta", 5), ("Fallen", 5)], 10);
        roster.kill_hero("Fallen").unwrap();
        let before = snapshot_all(&roster);

        assert!(roster
            .resolve_calamity(Calamity::new(10, ["Atlas", "Zeta", "Fallen"]))
            .is_err());
        assert!(roster
            .resolve_calamity(Calamity::new(10, ["Atlas", "Zeta", "Ghost"]))
            .is_err());
        assert!(roster
            .resolve_calamity(Calamity::new(11, ["Atlas", "Zeta"]))
            .is_err());

        assert_eq!(snapshot_all(&roster), before);
    }

    #[test]
    fn test_at_least_rule() {
        let roster = roster_with(&[("Atlas", 6), ("Zeta", 6)], 10);
        assert!(roster
            .resolve_calamity(Calamity::new(10, ["Atlas", "Zeta"]))
            .is_ok());
        assert_eq!(
            roster.resolve_calamity(Calamity::new(13, ["Atlas", "Zeta"])),
            Err(RosterError::InsufficientPower {
                required: 13,
                available: 12
            })
        );
    }

    #[test]
    fn test_exact_rule() {
        let roster =
            roster_with(&[("Atlas", 6), ("Zeta", 6)], 10).with_calamity_rule(CalamityRule::Exact);
        assert_eq!(
            roster.resolve_calamity(Calamity::new(10, ["Atlas", "Zeta"])),
            Err(RosterError::InsufficientPower {
                required: 10,
                available: 12
            })
        );
        assert!(roster
            .resolve_calamity(Calamity::new(12, ["Atlas", "Zeta"]))
            .is_ok());
    }

    #[test]
    fn test_exhaustion_cap_kills() {
        let roster = roster_with(&[("Atlas", 10), ("Zeta", 1)], 2);

        let first = roster
            .resolve_calamity(Calamity::new(11, ["Atlas", "Zeta"]))
            .unwrap();
        assert!(first.fallen.is_empty());

        let second = roster
            .resolve_calamity(Calamity::new(11, ["Atlas", "Zeta"]))
            .unwrap();
        assert_eq!(second.fallen, vec!["Atlas".to_string(), "Zeta".to_string()]);
        assert!(second.heroes.iter().all(|h| !h.alive && h.exhaustion == 2));

        assert_eq!(
            roster.resolve_calamity(Calamity::new(1, ["Atlas"])),
            Err(RosterError::DeadHero("Atlas".to_string()))
        );
    }

    #[test]
    fn test_duplicate_names_count_power_per_mention() {
        let roster = roster_with(&[("Atlas", 5)], 10);

        let report = roster
            .resolve_calamity(Calamity::new(10, ["Atlas", "Atlas"]))
            .unwrap();
        assert_eq!(report.total_power, 10);
        assert_eq!(report.heroes.len(), 1);
        assert_eq!(roster.get_hero("Atlas").unwrap().exhaustion, 1);

        assert_eq!(
            roster.resolve_calamity(Calamity::new(16, ["Atlas", "Atlas", "Atlas"])),
            Err(RosterError::InsufficientPower {
                required: 16,
                available: 15
            })
        );
        assert_eq!(roster.get_hero("Atlas").unwrap().exhaustion, 1);
    }

    #[test]
    fn test_malformed_name_is_an_unknown_hero() {
        let roster = roster_with(&[("Atlas", 5)], 10);

        assert_eq!(
            roster.resolve_calamity(Calamity::new(1, ["Ghost", ""])),
            Err(RosterError::UnknownHero("Ghost".to_string()))
        );
        assert_eq!(
            roster.resolve_calamity(Calamity::new(1, ["Atlas", ""])),
            Err(RosterError::UnknownHero(String::new()))
        );
        let long = "x".repeat(500);
        assert_eq!(
            roster.resolve_calamity(Calamity::new(1, vec![long.clone()])),
            Err(RosterError::UnknownHero(long))
        );
        assert_eq!(roster.get_hero("Atlas").unwrap().exhaustion, 0);
    }
}

//! Input validation for roster requests
//!
//! Everything here runs before the store is acquired, so a malformed request
//! never waits on, or holds, the roster.

use crate::error::{RosterError, RosterResult};
use crate::types::Calamity;

/// Longest hero name accepted, in characters
pub const MAX_NAME_LEN: usize = 128;

/// Check that a hero name is usable as a roster key
pub fn validate_name(name: &str) -> RosterResult<()> {
    if name.trim().is_empty() {
        return Err(RosterError::InvalidName(
            "name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(RosterError::InvalidName(format!(
            "name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }
    if name.chars().any(char::is_control) {
        return Err(RosterError::InvalidName(
            "name must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Check that a calamity names at least one hero.
///
/// Individual names are not checked here; a name that could never be on the
/// roster is reported as an unknown hero when the roster is scanned.
pub fn validate_calamity(calamity: &Calamity) -> RosterResult<()> {
    if calamity.heroes.is_empty() {
        return Err(RosterError::EmptyHeroList);
    }
    Ok(())
}

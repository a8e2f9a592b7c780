//! Data types for the hero roster
//!
//! This module contains the records held by the store and the payloads
//! exchanged with callers.

mod calamity;
mod hero;

pub use calamity::{Calamity, CalamityReport, CalamityRule};
pub use hero::{Hero, HeroSnapshot, NewHero};

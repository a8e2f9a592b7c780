//! Calamity types

use serde::{Deserialize, Serialize};

use super::HeroSnapshot;

/// A one-off challenge resolved by the combined power of the named heroes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calamity {
    #[serde(alias = "PowerLevel")]
    pub power_level: u32,
    #[serde(alias = "Heroes", default)]
    pub heroes: Vec<String>,
}

impl Calamity {
    pub fn new<I, S>(power_level: u32, heroes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            power_level,
            heroes: heroes.into_iter().map(Into::into).collect(),
        }
    }
}

/// How the combined power of the heroes is compared against the calamity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalamityRule {
    /// Combined power must be at least the required level
    #[default]
    AtLeast,
    /// Combined power must match the required level exactly
    Exact,
}

impl CalamityRule {
    pub fn is_satisfied(self, required: u32, available: u64) -> bool {
        match self {
            Self::AtLeast => available >= u64::from(required),
            Self::Exact => available == u64::from(required),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "at-least" | "at_least" | "atleast" => Some(Self::AtLeast),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }
}

/// Outcome of a successfully resolved calamity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalamityReport {
    pub required_power: u32,
    pub total_power: u64,
    /// Post-calamity state of every participating hero
    pub heroes: Vec<HeroSnapshot>,
    /// Heroes that died of exhaustion while resolving it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fallen: Vec<String>,
}

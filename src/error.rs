//! Error types for roster operations
//!
//! [`RosterError`] is the closed set of outcomes a roster operation can fail
//! with. Callers branch on the variant (or its [`code`](RosterError::code));
//! the `Display` text is only meant for humans.

use std::time::Duration;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors that can occur while operating on the roster
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The supplied hero name failed validation.
    #[error("invalid hero name: {0}")]
    InvalidName(String),

    /// A calamity named no heroes.
    #[error("at least one hero must be sent to face the calamity")]
    EmptyHeroList,

    /// A living hero already holds the name.
    #[error("hero '{0}' already exists")]
    AlreadyExists(String),

    /// A dead hero once held the name; it can never be reused.
    #[error("hero '{0}' fell in battle and the name can never be taken again")]
    NameRetired(String),

    #[error("hero '{0}' does not exist")]
    NotFound(String),

    /// The hero is dead and cannot rest.
    #[error("hero '{0}' is dead")]
    NotAlive(String),

    #[error("hero '{0}' is not exhausted and does not need rest")]
    NoRestNeeded(String),

    #[error("hero '{0}' is already dead")]
    AlreadyDead(String),

    #[error("hero '{0}' is dead and cannot retire")]
    CannotRetireDead(String),

    /// A calamity named a hero that is not on the roster.
    #[error("hero '{0}' does not exist and cannot face the calamity")]
    UnknownHero(String),

    /// A calamity named a dead hero.
    #[error("hero '{0}' is dead and can no longer fight")]
    DeadHero(String),

    /// The combined power of the heroes does not satisfy the calamity.
    #[error("heroes with combined power {available} cannot resolve a calamity of power {required}")]
    InsufficientPower { required: u32, available: u64 },

    /// The store could not be acquired within the configured bound.
    #[error("roster is busy, could not acquire it within {}ms", .timeout.as_millis())]
    ResourceUnavailable { timeout: Duration },
}

impl RosterError {
    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "INVALID_NAME",
            Self::EmptyHeroList => "EMPTY_HERO_LIST",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::NameRetired(_) => "NAME_RETIRED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::NotAlive(_) => "NOT_ALIVE",
            Self::NoRestNeeded(_) => "NO_REST_NEEDED",
            Self::AlreadyDead(_) => "ALREADY_DEAD",
            Self::CannotRetireDead(_) => "CANNOT_RETIRE_DEAD",
            Self::UnknownHero(_) => "UNKNOWN_HERO",
            Self::DeadHero(_) => "DEAD_HERO",
            Self::InsufficientPower { .. } => "INSUFFICIENT_POWER",
            Self::ResourceUnavailable { .. } => "RESOURCE_UNAVAILABLE",
        }
    }

    /// Whether the same request may succeed if simply retried
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }
}

//! Runtime configuration
//!
//! Read once at startup from the environment:
//! - `ROSTER_HOST`: address to bind (default `0.0.0.0`)
//! - `ROSTER_PORT`: port to listen on (default `8081`)
//! - `ROSTER_ACQUIRE_TIMEOUT_MS`: how long a request waits for the roster (default `3000`)
//! - `ROSTER_MAX_EXHAUSTION`: exhaustion at which heroes die (default `10`, minimum `1`)
//! - `ROSTER_CALAMITY_RULE`: `at-least` (default) or `exact`
//!
//! Values that fail to parse are logged and replaced by their default.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::roster::DEFAULT_MAX_EXHAUSTION;
use crate::store::DEFAULT_ACQUIRE_TIMEOUT;
use crate::types::CalamityRule;

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8081,
        }
    }
}

/// Rules and limits for the roster itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub acquire_timeout: Duration,
    pub max_exhaustion: u32,
    pub calamity_rule: CalamityRule,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
            max_exhaustion: DEFAULT_MAX_EXHAUSTION,
            calamity_rule: CalamityRule::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub roster: RosterConfig,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("ROSTER_HOST") {
            if !host.trim().is_empty() {
                config.server.host = host.trim().to_string();
            }
        }
        if let Some(port) = parse_var::<u16>(&lookup, "ROSTER_PORT") {
            config.server.port = port;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, "ROSTER_ACQUIRE_TIMEOUT_MS") {
            config.roster.acquire_timeout = Duration::from_millis(ms);
        }
        if let Some(max) = parse_var::<u32>(&lookup, "ROSTER_MAX_EXHAUSTION") {
            if max == 0 {
                warn!("ROSTER_MAX_EXHAUSTION must be at least 1, keeping default");
            } else {
                config.roster.max_exhaustion = max;
            }
        }
        if let Some(rule) = lookup("ROSTER_CALAMITY_RULE") {
            match CalamityRule::parse(&rule) {
                Some(rule) => config.roster.calamity_rule = rule,
                None => warn!(value = %rule, "unknown ROSTER_CALAMITY_RULE, keeping default"),
            }
        }

        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "could not parse environment variable, keeping default");
            None
        }
    }
}

//! Hero Roster Server - Binary Entry Point
//!
//! Loads configuration from the environment, builds the roster and serves
//! the HTTP API until Ctrl-C.

use std::sync::Arc;

use hero_roster::api::AppState;
use hero_roster::config::AppConfig;
use hero_roster::roster::HeroRoster;
use hero_roster::server::{start_server, ServerError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hero_roster=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(
        name = hero_roster::NAME,
        version = hero_roster::VERSION,
        acquire_timeout = ?config.roster.acquire_timeout,
        max_exhaustion = config.roster.max_exhaustion,
        calamity_rule = ?config.roster.calamity_rule,
        "starting roster server"
    );

    let roster = HeroRoster::from_config(&config.roster);
    let state = Arc::new(AppState::new(roster));

    start_server(&config.server, state).await
}

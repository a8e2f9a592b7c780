//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{calamity, heroes};
use super::state::AppState;
use super::websocket::ws_handler;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(ws_handler))
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/heroes", post(heroes::create_hero).get(heroes::list_heroes))
        .route(
            "/api/heroes/:name",
            get(heroes::get_hero).delete(heroes::retire_hero),
        )
        .route("/api/heroes/:name/rest", patch(heroes::rest_hero))
        .route("/api/heroes/:name/kill", patch(heroes::kill_hero))
        .route("/api/calamities", post(calamity::resolve_calamity))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

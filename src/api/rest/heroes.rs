//! Hero endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{HeroSnapshot, NewHero};

type HeroResponse = Result<Json<ApiResponse<HeroSnapshot>>, ApiError>;

/// POST /api/heroes - Create a hero
pub async fn create_hero(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewHero>, JsonRejection>,
) -> HeroResponse {
    let Json(new_hero) = payload?;
    let hero = state
        .with_roster(move |roster| roster.create_hero(new_hero))
        .await?;

    Ok(Json(ApiResponse::new(hero, state.current_sequence_id())))
}

/// GET /api/heroes - List every hero, dead ones included
pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<HeroSnapshot>>>, ApiError> {
    let heroes = state.with_roster(|roster| roster.list_heroes()).await?;
    let total = heroes.len();
    Ok(Json(ApiResponse::with_total(
        heroes,
        state.current_sequence_id(),
        total,
    )))
}

/// GET /api/heroes/:name - Fetch a single hero
pub async fn get_hero(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> HeroResponse {
    let hero = state
        .with_roster(move |roster| roster.get_hero(&name))
        .await?;
    Ok(Json(ApiResponse::new(hero, state.current_sequence_id())))
}

/// PATCH /api/heroes/:name/rest - Recover one point of exhaustion
pub async fn rest_hero(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> HeroResponse {
    let hero = state
        .with_roster(move |roster| roster.rest_hero(&name))
        .await?;

    Ok(Json(ApiResponse::new(hero, state.current_sequence_id())))
}

/// PATCH /api/heroes/:name/kill - Kill a living hero
pub async fn kill_hero(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> HeroResponse {
    let hero = state
        .with_roster(move |roster| roster.kill_hero(&name))
        .await?;

    Ok(Json(ApiResponse::new(hero, state.current_sequence_id())))
}

/// DELETE /api/heroes/:name - Retire a living hero, freeing the name
pub async fn retire_hero(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> HeroResponse {
    let hero = state
        .with_roster(move |roster| roster.retire_hero(&name))
        .await?;

    Ok(Json(ApiResponse::new(hero, state.current_sequence_id())))
}

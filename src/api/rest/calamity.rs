//! Calamity endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::{ApiError, ApiResponse};
use crate::api::state::AppState;
use crate::types::{Calamity, CalamityReport};

/// POST /api/calamities - Send heroes against a calamity
pub async fn resolve_calamity(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Calamity>, JsonRejection>,
) -> Result<Json<ApiResponse<CalamityReport>>, ApiError> {
    let Json(calamity) = payload?;
    let report = state
        .with_roster(move |roster| roster.resolve_calamity(calamity))
        .await?;

    Ok(Json(ApiResponse::new(report, state.current_sequence_id())))
}

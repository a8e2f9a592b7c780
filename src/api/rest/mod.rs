//! REST API module for HTTP endpoints
//!
//! - `POST /api/heroes` - Create a hero
//! - `GET /api/heroes` - List every hero, tombstones included
//! - `GET /api/heroes/:name` - Fetch a single hero
//! - `PATCH /api/heroes/:name/rest` - Recover one point of exhaustion
//! - `PATCH /api/heroes/:name/kill` - Kill a hero
//! - `DELETE /api/heroes/:name` - Retire a living hero
//! - `POST /api/calamities` - Resolve a calamity

pub mod calamity;
pub mod heroes;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::RosterError;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Latest published event when the response was built; for a mutation
    /// this is at least the ID of the event it produced
    pub sequence_id: u64,
    /// Total count (for list responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self {
            data,
            sequence_id,
            total: None,
        }
    }

    pub fn with_total(data: T, sequence_id: u64, total: usize) -> Self {
        Self {
            data,
            sequence_id,
            total: Some(total),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }
}

/// HTTP status for each roster error kind
pub fn status_for(err: &RosterError) -> StatusCode {
    match err {
        RosterError::NotFound(_) | RosterError::UnknownHero(_) => StatusCode::NOT_FOUND,
        RosterError::AlreadyExists(_)
        | RosterError::NameRetired(_)
        | RosterError::NotAlive(_)
        | RosterError::AlreadyDead(_)
        | RosterError::CannotRetireDead(_)
        | RosterError::DeadHero(_) => StatusCode::CONFLICT,
        RosterError::InvalidName(_)
        | RosterError::EmptyHeroList
        | RosterError::NoRestNeeded(_)
        | RosterError::InsufficientPower { .. } => StatusCode::BAD_REQUEST,
        RosterError::ResourceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self::new(status_for(&err), err.code(), err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut response = (status, Json(self)).into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static("1"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&RosterError::NotFound("a".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&RosterError::NameRetired("a".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&RosterError::InsufficientPower {
                required: 2,
                available: 1
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&RosterError::ResourceUnavailable {
                timeout: Duration::from_secs(3)
            }),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_api_error_body() {
        let err = ApiError::from(RosterError::AlreadyExists("Atlas".into()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ALREADY_EXISTS");
        assert_eq!(json["error"], "hero 'Atlas' already exists");
        assert!(json.get("status").is_none());
    }
}

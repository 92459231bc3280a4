//! HTTP error payloads and the extractor helpers that produce them.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Json, Path, Query,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::MessageResponse;
use std::fmt::Display;
use tracing::{error, warn};

/// Failure outcome of a handler, rendered as `{ "message": ... }`
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    /// Input rejected before it reached a service
    pub fn bad_request(message: &str, cause: impl Display) -> Self {
        warn!("{}: {}", message, cause);
        Self::BadRequest(message.to_string())
    }

    /// Service failure; the cause is logged, the client only sees `message`
    pub fn internal(message: &str, cause: anyhow::Error) -> Self {
        error!("{}: {:#}", message, cause);
        Self::Internal(message.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageResponse {
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

/// Numeric id from the path, 400 otherwise
pub fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ApiError::bad_request("Invalid id", rejection.body_text()))
}

/// Deserialized JSON body, or 400 with the resource-specific `message`
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request(message, rejection.body_text()))
}

pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| ApiError::bad_request("Invalid query", rejection.body_text()))
}

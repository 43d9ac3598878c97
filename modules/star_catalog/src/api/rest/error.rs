use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::error::{DomainError, UpstreamError};

/// API-facing error, rendered uniformly as a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    GatewayTimeout(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();
        (status, Json(ErrorBody { error: &message })).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::PersonNotFound { .. } => ApiError::NotFound("Person not found".into()),
            DomainError::PlanetNotFound { .. } => ApiError::NotFound("Planet not found".into()),
            DomainError::UserNotFound { .. } => ApiError::NotFound("User not found".into()),
            DomainError::EmailAlreadyExists { .. } => ApiError::Conflict(e.to_string()),
            DomainError::Validation { .. } => ApiError::BadRequest(e.to_string()),
            DomainError::Upstream(UpstreamError::Timeout { .. }) => {
                ApiError::GatewayTimeout(e.to_string())
            }
            DomainError::Upstream(_) => ApiError::BadGateway(e.to_string()),
            DomainError::Database { .. } => {
                tracing::error!(error = %e, "Database error surfaced to the API");
                ApiError::Internal(e.to_string())
            }
        }
    }
}

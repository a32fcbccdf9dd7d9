/*
 * Responsibility
 * - App-wide error definition
 * - IntoResponse implementation (HTTP status / JSON error body)
 * - AuthError -> response mapping, applied exactly once at the gate
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::error::AuthError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            // The cause is logged where it happened; the body stays generic.
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // Key-service trouble is server-side. Every other kind is a
            // classified 401 whose Display string is the response message.
            AuthError::KeyServiceUnavailable(_) => AppError::Internal,
            e => AppError::Unauthorized(e.to_string()),
        }
    }
}

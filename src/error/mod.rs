//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type for the whole request pipeline. Every
//! controller returns `Result<impl IntoResponse, AppError>`, and the
//! `IntoResponse` impl here renders the failure as the standard JSON envelope
//! (`{ success: false, message, ... }`). Internal errors are logged server-side
//! and reduced to a generic message so no driver or filesystem detail leaks to
//! clients.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use serde_json::json;
use thiserror::Error;

use crate::error::{config::ConfigError, validation::ValidationErrors};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Field-level input validation failure, reported before any persistence
    /// attempt. Carries the per-field rule violations for the response body.
    #[error("validation failed")]
    Validation(ValidationErrors),

    /// Resource not found. Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint would be violated. Results in 409.
    #[error("{0}")]
    Conflict(String),

    /// Operation not valid for the record's current state, e.g. restoring a
    /// record that is not deleted. Results in 400.
    #[error("{0}")]
    InvalidState(String),

    /// Sign-in failure. Deliberately carries no detail: unknown identifier,
    /// inactive account and wrong password all map to this one variant.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration rate limit exceeded. Results in 429 with a retry hint.
    #[error("too many registration attempts")]
    TooManyRequests { retry_after_minutes: u64 },

    /// Invalid request that is not a field-level validation issue.
    #[error("{0}")]
    BadRequest(String),

    /// Database operation error from SeaORM.
    ///
    /// Unique-constraint violations surfaced by the driver are mapped to a 409
    /// conflict response; everything else results in 500 with details logged.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem error while handling uploaded files.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed multipart upload payload.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// Internal server error with custom message. The message is logged but a
    /// generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

fn envelope(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            Self::NotFound(msg) => envelope(StatusCode::NOT_FOUND, &msg),
            Self::Conflict(msg) => envelope(StatusCode::CONFLICT, &msg),
            Self::InvalidState(msg) | Self::BadRequest(msg) => {
                envelope(StatusCode::BAD_REQUEST, &msg)
            }
            Self::InvalidCredentials => envelope(StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::TooManyRequests {
                retry_after_minutes,
            } => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "success": false,
                    "message": format!(
                        "Too many registration attempts. Please try again in {} minutes.",
                        retry_after_minutes
                    ),
                    "retryAfter": retry_after_minutes,
                })),
            )
                .into_response(),
            Self::MultipartErr(err) => {
                envelope(StatusCode::BAD_REQUEST, &format!("Invalid upload: {}", err))
            }
            Self::DbErr(err) => {
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    return envelope(
                        StatusCode::CONFLICT,
                        "A record with the same unique value already exists",
                    );
                }
                tracing::error!("Database error: {}", err);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => {
                tracing::error!("{}", err);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

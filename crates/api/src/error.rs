use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gamecatalog_core::error::CoreError;
use serde_json::json;

/// Message returned when a create or update collides with an existing
/// `(name, publisher)` pair.
pub const DUPLICATE_GAME_MESSAGE: &str = "A game with this name already exists for this publisher";

/// Message returned when an update, price change or delete targets an
/// unknown id.
pub const GAME_NOT_FOUND_MESSAGE: &str = "Game not found";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gamecatalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A malformed request (body, query string or path) with a
    /// human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::DuplicateGame { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "DUPLICATE_GAME",
                    DUPLICATE_GAME_MESSAGE.to_string(),
                ),
                CoreError::GameNotFound { .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    GAME_NOT_FOUND_MESSAGE.to_string(),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Repository(err) => {
                    tracing::error!(error = %err, "Repository error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

// Extractor rejections are client errors; they all surface as 400 so that
// 422 stays reserved for duplicate games.

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use annuaire_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the API's JSON error bodies:
/// validation failures serialize as `{"errors": [...]}` and every other
/// error as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `annuaire_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body could not be parsed as JSON.
    #[error("Invalid JSON")]
    InvalidJson,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{entity} not found") }),
            ),

            AppError::Core(CoreError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }

            AppError::InvalidJson => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Invalid JSON" }))
            }

            // Store failures are logged but never leak details to the caller.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal error occurred" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

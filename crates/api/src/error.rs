use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portfolio_core::error::CoreError;

use crate::response::{ErrorDocument, ErrorObject, StatusBody};

/// Pointer used for request bodies that could not be decoded at all.
pub const BODY_POINTER: &str = "/data";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the API's JSON error documents.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `portfolio_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not valid JSON or did not match the document shape.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id = %id, "Resource not found");
                StatusBody::respond(
                    StatusCode::NOT_FOUND,
                    "Not found",
                    Some(format!("The {entity} was not found")),
                )
            }
            AppError::Core(CoreError::Unauthorized) => {
                StatusBody::respond(StatusCode::UNAUTHORIZED, "Unauthorized request", None)
            }
            AppError::Core(CoreError::InvalidFields(errors)) => ErrorDocument {
                errors: errors.iter().map(ErrorObject::attribute).collect(),
            }
            .into_response(),

            // --- HTTP-specific errors ---
            AppError::MalformedBody(detail) => ErrorDocument {
                errors: vec![ErrorObject::new(BODY_POINTER, detail)],
            }
            .into_response(),

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                StatusBody::respond(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
        }
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use outreach_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses:
/// the caller always sees a single message, never a structured error list.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from the engine pipeline.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The caller's identity header is missing or malformed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN", core.to_string()),
                CoreError::MissingParameter(_) => {
                    (StatusCode::BAD_REQUEST, "MISSING_PARAMETER", core.to_string())
                }
                CoreError::UnknownOperation(_) => {
                    (StatusCode::BAD_REQUEST, "UNKNOWN_OPERATION", core.to_string())
                }
                CoreError::Validation(_) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", core.to_string())
                }
                CoreError::InvalidInput(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_INPUT", core.to_string())
                }
                CoreError::Configuration { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "CONFIGURATION_ERROR",
                    core.to_string(),
                ),
                CoreError::Remote(cause) => {
                    tracing::error!(error = %cause, "Collaborator call failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        "REMOTE_ERROR",
                        "A downstream call failed".to_string(),
                    )
                }
            },

            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

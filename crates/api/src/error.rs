use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use casting_core::error::CoreError;
use serde_json::json;

use crate::auth::AuthError;

pub const BAD_REQUEST_MESSAGE: &str = "Invalid Request: There is problem with your input data";
pub const NOT_FOUND_MESSAGE: &str = "Request resource not found";
pub const UNPROCESSABLE_MESSAGE: &str = "Unprocessable Entity";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`AuthError`] for token
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce the `{ success: false, error, message, code }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `casting_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Token verification or permission failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request syntax (bad JSON, non-integer path id, unparseable
    /// query string).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Well-formed request whose content cannot be processed.
    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::EmptyCollection { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", NOT_FOUND_MESSAGE.to_string())
                }
                CoreError::Validation(msg) => {
                    tracing::warn!(error = %msg, "Validation failed");
                    unprocessable()
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Token verification ---
            AppError::Auth(auth) => {
                tracing::debug!(error = %auth, code = auth.code(), "Request not authorized");
                (auth.status(), auth.code(), auth.to_string())
            }

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    "BAD_REQUEST",
                    BAD_REQUEST_MESSAGE.to_string(),
                )
            }
            AppError::Unprocessable(msg) => {
                tracing::warn!(error = %msg, "Unprocessable request");
                unprocessable()
            }
        };

        error_envelope(status, code, message)
    }
}

/// Render the JSON error envelope shared by every failure response.
pub fn error_envelope(status: StatusCode, code: &str, message: String) -> Response {
    let body = json!({
        "success": false,
        "error": status.as_u16(),
        "message": message,
        "code": code,
    });

    (status, axum::Json(body)).into_response()
}

fn unprocessable() -> (StatusCode, &'static str, String) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        "UNPROCESSABLE_ENTITY",
        UNPROCESSABLE_MESSAGE.to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else is a failed write or read and maps to 422; the
///   underlying error is logged, never returned.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", NOT_FOUND_MESSAGE.to_string()),
        sqlx::Error::Database(db_err) => {
            let sqlstate = db_err.code();
            tracing::error!(
                error = %db_err,
                code = sqlstate.as_deref().unwrap_or("unknown"),
                constraint = db_err.constraint().unwrap_or("none"),
                "Database error"
            );
            unprocessable()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            unprocessable()
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON that does not fit the target type: missing
            // fields, wrong field types.
            JsonRejection::JsonDataError(e) => AppError::Unprocessable(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

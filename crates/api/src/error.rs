use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scenebook_core::error::CoreError;
use scenebook_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for storage
/// failures. Every variant renders as `400 {"error", "code"}`; storage
/// failures are logged and reported as `Unknown error`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scenebook_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The scene document could not be read or written.
    #[error(transparent)]
    Store(StoreError),

    /// A malformed request body or path.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(core) => AppError::Core(core),
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    /// Machine-readable code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(core) => match core {
                CoreError::Validation(_) => "VALIDATION_ERROR",
                CoreError::DuplicateName { .. } => "DUPLICATE_NAME",
                CoreError::UnknownScope(_) => "UNKNOWN_CAMPAIGN",
                CoreError::UnknownEntity { .. } => "NOT_FOUND",
                CoreError::DuplicateScope(_) => "DUPLICATE_CAMPAIGN",
                CoreError::MissingConfiguration(_) | CoreError::InvalidConfiguration(_) => {
                    "CONFIGURATION_ERROR"
                }
            },
            AppError::Store(_) => "STORAGE_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match &self {
            AppError::Core(
                core @ (CoreError::MissingConfiguration(_) | CoreError::InvalidConfiguration(_)),
            ) => {
                tracing::error!(error = %core, "Configuration error while serving request");
                "Unknown error".to_string()
            }
            AppError::Core(core) => core.to_string(),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Scene store error");
                "Unknown error".to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

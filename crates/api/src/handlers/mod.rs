pub mod campaigns;
pub mod scenes;

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::{AppError, AppResult};

/// Unwrap a JSON body, turning extractor rejections into `400` errors
/// with the usual `{error, code}` body.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

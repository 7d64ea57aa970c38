use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use events_application::AppError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    /// Logged server side; only the fixed message reaches the caller.
    Internal(&'static str),
}

impl HttpError {
    pub fn from_app(err: AppError, internal_message: &'static str) -> Self {
        match err {
            AppError::BadRequest(msg) => HttpError::BadRequest(msg),
            other => {
                error!("{}: {}", internal_message, other);
                HttpError::Internal(internal_message)
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            HttpError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response()
            }
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

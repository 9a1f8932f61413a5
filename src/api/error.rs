use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON error envelope returned by failed API requests.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Unified application error type.
///
/// Implements [`IntoResponse`] so handlers can return `Result<T, AppError>`
/// and axum will convert errors into the JSON error envelope. Collector
/// failures never reach this type — they degrade to fallbacks inside the
/// collectors — so the only variant covers unexpected aggregation failures.
pub enum AppError {
    /// Internal server error (500).
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ApiErrorBody { error })).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

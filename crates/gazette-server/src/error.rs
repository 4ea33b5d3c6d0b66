use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gazette_db::StoreError;
use thiserror::Error;

/// Anything a handler can fail with. Every variant collapses to a plain
/// 500 response; the detail goes to the log, not the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request handler failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

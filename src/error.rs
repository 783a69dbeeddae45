//! Request-level errors and how they map onto HTTP responses.

use crate::io::StoreError;
use http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// The request path did not carry a valid title.
    #[error("invalid title in path: {0}")]
    InvalidTitle(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for WikiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidTitle(path) => {
                tracing::debug!(path = %path, "rejected request path");
                (StatusCode::NOT_FOUND, "404 page not found").into_response()
            }
            Self::Store(err) => {
                tracing::error!(error = %err, "page store error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "template error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

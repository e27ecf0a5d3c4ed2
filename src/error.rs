// src/error.rs
//! Error taxonomy for the feed proxy. Everything resolves to a JSON body;
//! the page always has a state to render.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Upstream transport failure, or a non-ok feed status under the
    /// bad-gateway policy: 502.
    #[error("{0}")]
    Upstream(String),

    /// Anything else that went wrong while proxying: 500, with best-effort
    /// message extraction.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "feed proxy internal error");
                let mut msg = format!("{err:#}");
                if msg.is_empty() {
                    msg = "Unknown error".to_string();
                }
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

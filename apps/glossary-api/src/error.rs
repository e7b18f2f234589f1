//! Error types for the glossary API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glossary_core::GlossaryError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Resolution failed: {0}")]
    Resolution(#[from] GlossaryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Collaborator failures are upstream problems; everything
            // else is ours
            ApiError::Resolution(
                e @ (GlossaryError::Embedding(_) | GlossaryError::WebSearch(_)),
            ) => {
                tracing::error!("Collaborator error: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
            ApiError::Resolution(e) => {
                tracing::error!("Resolution error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

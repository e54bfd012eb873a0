use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TgExtractError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Gemini error: {0}")]
    Gemini(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for TgExtractError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TgExtractError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Everything that is not a client input error collapses into one
            // generic category: logged once here, never leaked to the caller.
            TgExtractError::Gemini(_)
            | TgExtractError::Http(_)
            | TgExtractError::Json(_)
            | TgExtractError::Internal(_) => {
                tracing::error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TgExtractError>;

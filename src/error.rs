use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

use crate::llm::LlmError;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    ConfigError(String),

    #[error("AI analysis error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            // The client classifies credential rejections; everything else
            // surfaces as a generic failure carrying the underlying detail.
            AppError::Llm(LlmError::InvalidApiKey) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI API key is invalid. Please check your configuration.".to_string(),
            ),
            AppError::Llm(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to analyze idea due to an internal error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

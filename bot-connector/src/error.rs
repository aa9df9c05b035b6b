//! HTTP-facing error taxonomy
//!
//! Every failure leaving a handler is an `ApiError`. Its status code comes
//! from the variant and its body is always `{"message": ...}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

use crate::validators::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input, raised by the validators
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ApiError {
    pub fn bot_not_found() -> Self {
        Self::NotFound("Bot not found".to_string())
    }

    pub fn channel_not_found() -> Self {
        Self::NotFound("Channel not found".to_string())
    }

    pub fn slug_taken(slug: &str) -> Self {
        Self::Conflict(format!("Channel slug {} is already taken for this bot", slug))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Database(e) => {
                log::error!("Database error while handling request: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { message })
    }
}

//! Error types for the café service.
//!
//! Every error is rendered as the standard response envelope
//! `{"success": false, "error": ...}` with the matching HTTP status.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/// Result type for café service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed (missing or malformed parameter)
    #[error("{0}")]
    BadRequest(String),

    /// The addressed row does not exist
    #[error("{0}")]
    NotFound(String),

    /// The data store reported a failure; its message is passed through
    #[error("{0}")]
    Store(String),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: &str) -> Self {
        AppError::NotFound(format!("{} not found", resource))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::BadRequest("q".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("Order").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store("connection reset".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_message_passes_through_verbatim() {
        let err = AppError::Store("duplicate key value violates unique constraint".into());
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(AppError::not_found("Menu item").to_string(), "Menu item not found");
    }
}

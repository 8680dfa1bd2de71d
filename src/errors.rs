// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Message returned when a create request carries no file
pub const MISSING_PHOTO: &str = "You must provide a photo.";

/// Application-specific error types
/// DOCUMENTATION: Every handler failure ends up in one of these variants,
/// and each variant maps to exactly one HTTP status code
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    ValidationFailed(String),

    #[error("Photo not found")]
    NotFound,

    #[error("File too large: the limit is {0} bytes")]
    PayloadTooLarge(usize),

    #[error("{0}")]
    StoreError(String),
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::ValidationFailed(e.to_string())
    }
}

/// Convert ApiError to HTTP response
/// DOCUMENTATION: Body is always `{"error": <message>}`
impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::ValidationFailed(MISSING_PHOTO.into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::PayloadTooLarge(10).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::StoreError("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_rt::test]
    async fn test_not_found_body() {
        let response = ApiError::NotFound.error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "Photo not found" }));
    }

    #[actix_rt::test]
    async fn test_store_error_exposes_message() {
        let response = ApiError::StoreError("relation \"Photos\" does not exist".into())
            .error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "relation \"Photos\" does not exist");
    }
}

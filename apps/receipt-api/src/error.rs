//! Error types for the Receipt API.
//!
//! ## Response Mapping
//! ```text
//! ValidationError (any) ─┐
//! JSON body rejected ────┴──► ApiError::InvalidReceipt ──► 400 {"error": "The receipt is invalid."}
//! StoreError::NotFound ─────► ApiError::NotFound ───────► 404 {"error": "No receipt found for that ID."}
//! ```
//!
//! The specific validation reason is logged, never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ValidationError;
use receipt_store::StoreError;
use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

/// Client-facing message for any rejected submission.
pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";

/// Client-facing message for an unknown receipt id.
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid receipt")]
    InvalidReceipt,

    #[error("Not found: {0}")]
    NotFound(String),
}

/// JSON body sent with every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidReceipt => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn client_message(&self) -> &'static str {
        match self {
            ApiError::InvalidReceipt => INVALID_RECEIPT_MESSAGE,
            ApiError::NotFound(_) => NOT_FOUND_MESSAGE,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        warn!(reason = %error, "Receipt rejected");
        ApiError::InvalidReceipt
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(reason = %rejection.body_text(), "Receipt body rejected");
        ApiError::InvalidReceipt
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { id } => ApiError::NotFound(id),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.client_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_validation_error_is_a_bad_request() {
        let errors = [
            ValidationError::MissingField { field: "total" },
            ValidationError::InvalidRetailer,
            ValidationError::InvalidDate,
            ValidationError::InvalidTime,
            ValidationError::InvalidTotal,
            ValidationError::NoItems,
            ValidationError::InvalidItem {
                index: 0,
                reason: receipt_core::ItemDefect::InvalidPrice,
            },
        ];

        for error in errors {
            let api_error = ApiError::from(error);
            assert!(matches!(api_error, ApiError::InvalidReceipt));
            assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
            assert_eq!(api_error.client_message(), INVALID_RECEIPT_MESSAGE);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let api_error = ApiError::from(StoreError::not_found("abc"));
        assert_eq!(api_error.status(), StatusCode::NOT_FOUND);
        assert_eq!(api_error.client_message(), NOT_FOUND_MESSAGE);
    }
}

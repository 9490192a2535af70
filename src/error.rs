//! HTTP error responses.
//!
//! [`AppError`] renders as a JSON body of the form
//! `{"error": {"code": ..., "message": ..., "details": ...}}` with a matching
//! status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::error::LinkError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::DecodeFailure => AppError::bad_request("Cannot decode slug", json!({})),
            LinkError::NotFound => AppError::not_found("Link not found", json!({})),
            // Storage details stay in the logs.
            LinkError::StorageFailure(_) | LinkError::InvalidArgument(_) => {
                AppError::internal("Failed to create link", json!({}))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StorageError;

    #[test]
    fn test_link_error_status_mapping() {
        assert_eq!(
            AppError::from(LinkError::DecodeFailure).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(LinkError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(LinkError::StorageFailure(StorageError::Unavailable(
                "down".to_string()
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(LinkError::InvalidArgument("-1".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::bad_request("Invalid payload", json!({ "reason": "eof" })).to_error_info();

        assert_eq!(info.code, "validation_error");
        assert_eq!(info.message, "Invalid payload");
        assert_eq!(info.details["reason"], "eof");
    }

    #[test]
    fn test_storage_details_not_exposed() {
        let err = AppError::from(LinkError::StorageFailure(StorageError::Unavailable(
            "password=hunter2".to_string(),
        )));

        assert!(!err.to_string().contains("hunter2"));
    }
}

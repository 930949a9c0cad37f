//! Unified error handling mapped to JSON error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error detail in the JSON error body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// JSON body returned for failed requests: `{"error": {"code", "message"}}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ApiError,
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Check if this error represents malformed request input.
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, Self::InvalidFilter(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidFilter(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_FILTER", msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ApiError {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_maps_to_bad_request() {
        let response = AppError::InvalidFilter("bad shape".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let response = AppError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn app_error_display() {
        let err = AppError::InvalidFilter("`levels_filter` must be an array of strings".into());
        assert_eq!(
            err.to_string(),
            "Invalid filter: `levels_filter` must be an array of strings"
        );
        assert!(err.is_invalid_filter());
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            error: ApiError {
                code: "INVALID_FILTER".to_string(),
                message: "bad".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_FILTER");
        assert_eq!(json["error"]["message"], "bad");
    }
}

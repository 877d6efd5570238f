//! HTTP-facing application errors.
//!
//! Only structurally invalid requests reach the client as errors. Provider and
//! resolution failures are recovered inside the services and never surface here.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned to the client: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input. Rendered as `400 Bad Request`.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::bad_request("URL is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::bad_request("Invalid URL format").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

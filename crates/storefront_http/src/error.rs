//! crates/storefront_http/src/error.rs
//!
//! Error types shared by the services: `ApiError` for start-up failures and
//! `HttpError` for anything a handler turns into a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use storefront_core::ports::PortError;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::config::ConfigError;

/// The primary error type for a service binary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// A status code plus message, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct HttpError {
    pub status: StatusCode,
    pub message: String,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<PortError> for HttpError {
    fn from(err: PortError) -> Self {
        if err.is_not_found() {
            warn!(error = %err, "Resource not found");
            Self::new(StatusCode::NOT_FOUND, err.to_string())
        } else {
            error!("Port operation failed: {:?}", err);
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn not_found_variants_map_to_404() {
        for err in [
            PortError::CartNotFound("u".into()),
            PortError::ItemNotFound(1),
            PortError::NotFound("Product 9".into()),
        ] {
            assert_eq!(HttpError::from(err).status, StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn unexpected_maps_to_500_without_leaking_detail() {
        let err = HttpError::from(PortError::Unexpected("lock poisoned".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("poisoned"));
    }

    #[test]
    fn startup_failures_convert_into_api_error() {
        let err: ApiError = ConfigError::MissingVar("RUST_LOG".into()).into();
        assert!(matches!(err, ApiError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing the environment variable RUST_LOG"
        );

        let err: ApiError = std::io::Error::from(std::io::ErrorKind::AddrInUse).into();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[tokio::test]
    async fn renders_json_error_body() {
        let response = HttpError::from(PortError::CartNotFound("u".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Cart not found");
    }
}

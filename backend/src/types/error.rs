//! Universal error handling for the API

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::background_removal::BackgroundRemovalError;

/// API error response body returned to the web client
#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: &'static str,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(status: StatusCode, code: &'static str, msg: &'static str) -> Self {
        Self {
            status,
            code,
            inner: ApiErrorResponse { error: msg },
        }
    }

    /// HTTP status of the error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code, only used in logs
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Message returned to the client
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.inner.error
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.code, self.inner.error),
            500..=599 => tracing::error!("Server error: {} - {}", self.code, self.inner.error),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert background removal failures to application errors
///
/// The backend status and body are logged here and never reach the client.
impl From<BackgroundRemovalError> for AppError {
    fn from(err: BackgroundRemovalError) -> Self {
        use BackgroundRemovalError::{InvalidUpload, NetworkError, UpstreamError};

        match &err {
            UpstreamError { status, body } => {
                tracing::error!("Background removal backend returned {status}: {body}");
            }
            NetworkError(msg) => {
                tracing::error!("Background removal backend unreachable: {msg}");
            }
            InvalidUpload(msg) => {
                tracing::error!("Failed to build backend request: {msg}");
            }
        }

        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "processing_failed",
            "Failed to process image",
        )
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}

use aide::axum::IntoApiResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use schemars::JsonSchema;
use serde::Serialize;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "RemoveBG AI Frontend";

/// Heartbeat payload
#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    status: String,
    /// Current server time (RFC 3339, UTC)
    timestamp: String,
    /// Name of the service
    service: String,
    /// Current version of the application
    version: String,
    /// Commit hash of the current build (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    rev: Option<String>,
}

/// Health check endpoint
///
/// Returns the current status and version information of the service.
/// This endpoint can be used for monitoring and deployment verification.
#[allow(clippy::unused_async)]
pub async fn handler() -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rev: option_env!("GIT_REV").map(ToString::to_string),
    })
}

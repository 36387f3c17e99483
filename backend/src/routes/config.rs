use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Serialize;

use crate::types::AdsConfig;

#[derive(Serialize, JsonSchema)]
pub struct ConfigResponse {
    /// Ad network and conversion tracking identifiers
    ads: AdsConfig,
}

/// Public configuration for the web client
#[allow(clippy::unused_async)]
pub async fn get_config(Extension(ads): Extension<AdsConfig>) -> Json<ConfigResponse> {
    Json(ConfigResponse { ads })
}

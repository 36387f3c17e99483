mod config;
mod docs;
/// Health check
pub mod health;
/// Upload forwarding
pub mod remove_bg;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/api/remove-bg", post(remove_bg::remove_background))
        .api_route("/api/health", get(health::handler))
        .api_route("/api/config", get(config::get_config))
}

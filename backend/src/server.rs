use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::routes;
use crate::{
    background_removal::BackgroundRemover,
    types::{AdsConfig, Environment},
};

/// Response headers added to every response
fn security_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("origin-when-cross-origin"),
        ),
        (
            HeaderName::from_static("permissions-policy"),
            HeaderValue::from_static("camera=(), microphone=(), geolocation=()"),
        ),
    ]
}

/// Builds the application router with all routes and layers
///
/// `max_upload_bytes` of `None` disables the request body limit.
pub fn router(
    environment: Environment,
    remover: Arc<dyn BackgroundRemover>,
    ads_config: AdsConfig,
    max_upload_bytes: Option<usize>,
) -> Router {
    let mut openapi = OpenApi::default();

    let body_limit = max_upload_bytes.map_or_else(DefaultBodyLimit::disable, DefaultBodyLimit::max);

    let mut router = routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(remover))
        .layer(Extension(ads_config))
        .layer(body_limit);

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    remover: Arc<dyn BackgroundRemover>,
) -> anyhow::Result<()> {
    let port = environment.port()?;
    let ads_config = environment.ads_config();
    let max_upload_bytes = environment.max_upload_bytes();

    let router = router(environment, remover, ads_config, max_upload_bytes);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🔄 RemoveBG gateway started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}

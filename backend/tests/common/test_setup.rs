use axum::{body::Body, http::Request, response::Response, Router};
use removebg_gateway::{
    background_removal::BackgroundRemovalClient,
    server,
    types::{AdsConfig, Environment},
};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::MockServer;

use super::utils::MULTIPART_BOUNDARY;

/// Setup test environment
pub fn setup_test_env() {
    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Router wired to a mocked background removal backend
pub struct TestSetup {
    pub router: Router,
    pub environment: Environment,
    pub backend: MockServer,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self::with_config(Environment::Development, AdsConfig::default(), None).await
    }

    pub async fn with_config(
        environment: Environment,
        ads_config: AdsConfig,
        max_upload_bytes: Option<usize>,
    ) -> Self {
        setup_test_env();

        let backend = MockServer::start().await;
        let router = Self::router_for(
            &backend.uri(),
            environment.clone(),
            ads_config,
            max_upload_bytes,
        );

        Self {
            router,
            environment,
            backend,
        }
    }

    /// Router pointed at an arbitrary backend URL
    pub fn router_for(
        backend_url: &str,
        environment: Environment,
        ads_config: AdsConfig,
        max_upload_bytes: Option<usize>,
    ) -> Router {
        let remover = Arc::new(
            BackgroundRemovalClient::new(backend_url).expect("Failed to build backend client"),
        );

        server::router(environment, remover, ads_config, max_upload_bytes)
    }

    pub async fn send_multipart_request(
        &self,
        route: &str,
        body: Vec<u8>,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        send_multipart_request(&self.router, route, body).await
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

pub async fn send_multipart_request(
    router: &Router,
    route: &str,
    body: Vec<u8>,
) -> Result<Response, Box<dyn std::error::Error>> {
    let request = Request::builder()
        .uri(route)
        .method("POST")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))?;

    let response = router.clone().oneshot(request).await?;
    Ok(response)
}

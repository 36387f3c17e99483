use std::sync::Arc;

use removebg_gateway::{background_removal::BackgroundRemovalClient, server, types::Environment};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // Use JSON format for staging/production, regular format for development
    if environment.json_logs() {
        fmt().json().with_env_filter(env_filter).init();
    } else {
        fmt().with_env_filter(env_filter).init();
    }

    let backend_url = environment.backend_url();
    tracing::info!("Forwarding uploads to {backend_url}");

    let remover = Arc::new(BackgroundRemovalClient::new(backend_url)?);

    server::start(environment, remover).await
}

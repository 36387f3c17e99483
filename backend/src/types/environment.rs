//! Environment configuration for different deployment stages

use std::env;

use tracing::Level;

use super::AdsConfig;

/// Backend used when `BACKEND_URL` is not set
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (local background removal backend)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if `APP_ENV` contains an unknown stage
    pub fn from_env() -> anyhow::Result<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => anyhow::bail!("Invalid environment: {env}"),
        }
    }

    /// Base URL of the background removal backend
    #[must_use]
    pub fn backend_url(&self) -> String {
        let url = env::var("BACKEND_URL")
            .ok()
            .map(|val| val.trim().trim_end_matches('/').to_string())
            .filter(|val| !val.is_empty());

        match self {
            Self::Production | Self::Staging => url.unwrap_or_else(|| {
                tracing::warn!("BACKEND_URL is not set, falling back to {DEFAULT_BACKEND_URL}");
                DEFAULT_BACKEND_URL.to_string()
            }),
            Self::Development => url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
        }
    }

    /// Port the HTTP server listens on
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    #[allow(clippy::unused_self)]
    pub fn port(&self) -> anyhow::Result<u16> {
        env::var("PORT").map_or(Ok(DEFAULT_PORT), |p| Ok(p.trim().parse::<u16>()?))
    }

    /// Optional upper bound for request bodies, `None` disables the limit
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn max_upload_bytes(&self) -> Option<usize> {
        env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|val| val.trim().parse::<usize>().ok())
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Ad and analytics identifiers handed to the web client
    #[must_use]
    pub fn ads_config(&self) -> AdsConfig {
        AdsConfig::from_env(matches!(self, Self::Production))
    }

    /// Default tracing level, overridable with `TRACING_LEVEL`
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}

//! Error types for background removal requests

use thiserror::Error;

/// Result type for background removal requests
pub type BackgroundRemovalResult<T> = Result<T, BackgroundRemovalError>;

/// Errors that can occur while forwarding an image to the backend
#[derive(Error, Debug)]
pub enum BackgroundRemovalError {
    /// The backend could not be reached or the response could not be read
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The backend answered with a non-success status
    #[error("Backend returned status {status}: {body}")]
    UpstreamError {
        /// HTTP status code returned by the backend
        status: u16,
        /// Raw response body, for logs only
        body: String,
    },

    /// The outbound multipart part could not be built
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl From<reqwest::Error> for BackgroundRemovalError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error.to_string())
    }
}

impl From<reqwest_middleware::Error> for BackgroundRemovalError {
    fn from(error: reqwest_middleware::Error) -> Self {
        Self::NetworkError(error.to_string())
    }
}

mod error;

pub use error::{BackgroundRemovalError, BackgroundRemovalResult};

use bytes::Bytes;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Path of the removal endpoint on the backend
const REMOVE_BG_PATH: &str = "/remove-bg";

/// An image submitted by a client, relayed to the backend as-is
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Multipart field name the image arrived under
    pub field_name: String,
    /// Original filename, if the client sent one
    pub file_name: Option<String>,
    /// Declared media type, if the client sent one
    pub content_type: Option<String>,
    /// Opaque file bytes
    pub data: Bytes,
}

impl ImageUpload {
    /// Builds the outbound multipart form carrying the same part
    ///
    /// # Errors
    ///
    /// Returns `BackgroundRemovalError::InvalidUpload` if the declared media
    /// type cannot be used as a part content type
    pub fn into_form(self) -> BackgroundRemovalResult<Form> {
        let length = self.data.len() as u64;
        let mut part = Part::stream_with_length(self.data, length);

        if let Some(file_name) = self.file_name {
            part = part.file_name(file_name);
        }

        if let Some(content_type) = &self.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| BackgroundRemovalError::InvalidUpload(e.to_string()))?;
        }

        Ok(Form::new().part(self.field_name, part))
    }
}

/// Trait for the background removal backend
#[async_trait::async_trait]
pub trait BackgroundRemover: Send + Sync {
    /// Sends the image to the backend and returns the processed image bytes
    async fn remove_background(&self, upload: ImageUpload) -> BackgroundRemovalResult<Bytes>;
}

/// HTTP client for the external background removal backend
pub struct BackgroundRemovalClient {
    backend_url: String,
    http_client: ClientWithMiddleware,
}

impl BackgroundRemovalClient {
    /// Creates a new client for the backend at `backend_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(backend_url: impl Into<String>) -> reqwest::Result<Self> {
        let reqwest_client = Client::builder()
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .build()?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

#[async_trait::async_trait]
impl BackgroundRemover for BackgroundRemovalClient {
    async fn remove_background(&self, upload: ImageUpload) -> BackgroundRemovalResult<Bytes> {
        let url = format!("{}{REMOVE_BG_PATH}", self.backend_url);
        let form = upload.into_form()?;

        let response = self.http_client.post(url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(BackgroundRemovalError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: Option<&str>) -> ImageUpload {
        ImageUpload {
            field_name: "file".to_string(),
            file_name: Some("cat.jpg".to_string()),
            content_type: content_type.map(ToString::to_string),
            data: Bytes::from_static(b"\xff\xd8\xff"),
        }
    }

    #[test]
    fn test_into_form_accepts_declared_type() {
        let form = upload(Some("image/jpeg")).into_form().unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[test]
    fn test_into_form_rejects_invalid_type() {
        let err = upload(Some("not a mime")).into_form().unwrap_err();
        assert!(matches!(err, BackgroundRemovalError::InvalidUpload(_)));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = BackgroundRemovalClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.backend_url(), "http://localhost:8000");
    }
}

use std::sync::Arc;

use aide::OperationOutput;
use axum::{
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use bytes::Bytes;
use tracing::instrument;

use crate::{
    background_removal::{BackgroundRemover, ImageUpload},
    types::AppError,
};

/// Processed image returned by the backend, always served as PNG
pub struct PngImage(pub Bytes);

impl IntoResponse for PngImage {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, mime::IMAGE_PNG.essence_str()),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            self.0,
        )
            .into_response()
    }
}

impl OperationOutput for PngImage {
    type Inner = Bytes;
}

/// Removes the background of an uploaded image
///
/// Relays the uploaded file to the background removal backend in a single
/// request and returns the backend's bytes unchanged. Any backend failure is
/// reported as a generic 500; details only go to the logs.
#[instrument(
    skip(remover, upload),
    fields(file_name = ?upload.file_name, size = upload.data.len())
)]
pub async fn remove_background(
    Extension(remover): Extension<Arc<dyn BackgroundRemover>>,
    upload: ImageUpload,
) -> Result<PngImage, AppError> {
    tracing::info!("Forwarding image to background removal backend");

    let image = remover.remove_background(upload).await?;

    tracing::info!(processed_size = image.len(), "Background removed");

    Ok(PngImage(image))
}

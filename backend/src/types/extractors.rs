//! Custom extractors for request validation

use aide::operation::OperationInput;
use aide::OperationOutput;
use axum::{
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::StatusCode,
};

use crate::background_removal::ImageUpload;
use crate::types::error::AppError;

/// Multipart field name the web client uses for the image
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Maps a multipart read failure, keeping body limit rejections distinct
fn read_error(err: &MultipartError, msg: &'static str) -> AppError {
    tracing::debug!("{msg}: {err}");

    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            "payload_too_large",
            "Uploaded file is too large",
        );
    }

    AppError::new(StatusCode::BAD_REQUEST, "invalid_multipart", msg)
}

impl<S> FromRequest<S> for ImageUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await.map_err(|err| {
            tracing::debug!("Multipart rejection: {err}");
            AppError::new(
                StatusCode::BAD_REQUEST,
                "invalid_multipart",
                "Request must be multipart/form-data",
            )
        })?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| read_error(&err, "Failed to read multipart data"))?
        {
            let field_name = field.name().map(ToString::to_string);
            let file_name = field.file_name().map(ToString::to_string);

            // The first part named `file` or carrying a filename is the upload
            if field_name.as_deref() != Some(UPLOAD_FIELD_NAME) && file_name.is_none() {
                continue;
            }

            let field_name = field_name.unwrap_or_else(|| UPLOAD_FIELD_NAME.to_string());
            let content_type = field.content_type().map(ToString::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|err| read_error(&err, "Failed to read image data"))?;

            return Ok(Self {
                field_name,
                file_name,
                content_type,
                data,
            });
        }

        Err(AppError::new(
            StatusCode::BAD_REQUEST,
            "missing_file",
            "No image file provided",
        ))
    }
}

impl OperationInput for ImageUpload {
    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        // Document rejection responses
        AppError::inferred_responses(ctx, operation)
    }
}

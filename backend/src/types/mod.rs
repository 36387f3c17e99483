mod ads_config;
mod environment;
mod error;
mod extractors;

pub use ads_config::{AdSlots, AdsConfig};
pub use environment::{Environment, DEFAULT_BACKEND_URL, DEFAULT_PORT};
pub use error::{ApiErrorResponse, AppError};
pub use extractors::UPLOAD_FIELD_NAME;

use actix_multipart::{form::MultipartFormConfig, MultipartError};
use actix_web::error::{InternalError, PayloadError};

use crate::modules::uploads::application::domain::policies::UploadPolicy;
use crate::shared::api::ApiResponse;

/// Room for multipart boundaries and part headers on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Caps multipart bodies at the resume size limit while the stream is read,
/// and renders extraction failures in the shared error shape.
pub fn upload_form_config() -> MultipartFormConfig {
    let limit = UploadPolicy::MAX_FILE_SIZE_BYTES as usize + FORM_OVERHEAD_BYTES;

    MultipartFormConfig::default()
        .total_limit(limit)
        .memory_limit(limit)
        .error_handler(|err, _req| {
            tracing::debug!(error = %err, "Rejected multipart form");
            let message = match err {
                MultipartError::Payload(PayloadError::Overflow) => {
                    "File too large. Maximum size is 10MB"
                }
                _ => "Failed to get file from form",
            };
            InternalError::from_response(err, ApiResponse::bad_request(message)).into()
        })
}

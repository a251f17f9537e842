// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Renders body extraction failures (bad JSON, wrong content type, oversized
/// payload) in the same error shape as every other route.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("Invalid request body"),
        )
        .into()
    })
}

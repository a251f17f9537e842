// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

pub use crate::shared::api::ErrorBody;

/// `{success, message, data?}` body of delete and view-count routes
#[derive(Serialize, ToSchema)]
pub struct Acknowledgement {
    /// Whether the operation took effect
    #[schema(example = true)]
    pub success: bool,

    #[schema(example = "Job deleted successfully")]
    pub message: String,

    /// Upstream payload, when there is one
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

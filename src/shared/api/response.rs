// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing route.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Reason phrase of the HTTP status
    #[schema(example = "Bad Request")]
    pub error: String,

    /// Human-readable explanation
    #[schema(example = "Missing required field: title")]
    pub message: String,

    /// Numeric HTTP status, repeated for clients that only see the body
    #[schema(example = 400)]
    pub status: u16,
}

/// `{success, message, data?}` acknowledgement used by delete and view routes.
#[derive(Debug, Serialize)]
pub struct StatusMessage<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn acknowledged<T: Serialize>(success: bool, message: &str, data: Option<T>) -> HttpResponse {
        HttpResponse::Ok().json(StatusMessage {
            success,
            message: message.to_string(),
            data,
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.to_string(),
            status: status.as_u16(),
        })
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_gateway(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_GATEWAY, message)
    }
}

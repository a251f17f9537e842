use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::InternalError,
    http::StatusCode,
    middleware::Next,
    Error,
};
use std::time::Duration;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Upper bound on handling one request, registered as app data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeout(pub Duration);

impl Default for RequestTimeout {
    fn default() -> Self {
        Self(Duration::from_secs(60))
    }
}

/// Drops the in-flight handler (and any upstream call it is awaiting) once
/// the budget runs out.
pub async fn enforce_request_timeout(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let RequestTimeout(limit) = req
        .app_data::<RequestTimeout>()
        .copied()
        .unwrap_or_default();
    let path = req.path().to_string();

    match tokio::time::timeout(limit, next.call(req)).await {
        Ok(result) => result,
        Err(_) => {
            warn!(path = %path, limit_secs = limit.as_secs(), "Request timed out");
            Err(InternalError::from_response(
                "request timed out",
                ApiResponse::error(StatusCode::GATEWAY_TIMEOUT, "Request timed out"),
            )
            .into())
        }
    }
}

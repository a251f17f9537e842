use actix_web::{post, web, Responder};
use serde_json::Value;

use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/applications",
    tag = "Applications",
    request_body(content = Object, description = "ApplicationInput; jobId, firstName, lastName, email, phone, resumeUrl, currentLocation and availability are required"),
    responses(
        (status = 201, description = "Application submitted; confirmation email queued"),
        (status = 400, description = "Missing field or invalid body", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    )
)]
#[post("/api/v1/applications")]
pub async fn submit_application_handler(
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.applications.submit(body.into_inner()).await {
        Ok(application) => ApiResponse::created(application),
        Err(e) => relay_failure(e, "Failed to submit application"),
    }
}

use actix_web::{put, web, Responder};
use serde_json::Value;

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    put,
    path = "/api/v1/jobs/{id}",
    tag = "Jobs",
    params(("id" = String, Path, description = "Job ID")),
    request_body(content = Object, description = "Partial JobInput"),
    responses(
        (status = 200, description = "Job updated"),
        (status = 400, description = "Invalid body", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/jobs/{id}")]
pub async fn update_job_handler(
    _token: BearerToken,
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.jobs.update_job(&path.into_inner(), body.into_inner()).await {
        Ok(job) => ApiResponse::success(job),
        Err(e) => relay_failure(e, "Failed to update job"),
    }
}

use actix_web::{delete, post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/jobs/{id}/publish",
    tag = "Jobs",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job published"),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/jobs/{id}/publish")]
pub async fn publish_job_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.jobs.publish_job(&path.into_inner()).await {
        Ok(job) => ApiResponse::success(job),
        Err(e) => relay_failure(e, "Failed to publish job"),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/jobs/{id}/close",
    tag = "Jobs",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job closed"),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/jobs/{id}/close")]
pub async fn close_job_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.jobs.close_job(&path.into_inner()).await {
        Ok(job) => ApiResponse::success(job),
        Err(e) => relay_failure(e, "Failed to close job"),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/jobs/{id}",
    tag = "Jobs",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job deleted", body = crate::api::schemas::Acknowledgement),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/v1/jobs/{id}")]
pub async fn delete_job_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.jobs.delete_job(&path.into_inner()).await {
        Ok(result) => ApiResponse::acknowledged(true, "Job deleted successfully", Some(result)),
        Err(e) => relay_failure(e, "Failed to delete job"),
    }
}

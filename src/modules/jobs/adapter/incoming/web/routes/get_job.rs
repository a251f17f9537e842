use actix_web::{get, web, Responder};

use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/jobs/{id}",
    tag = "Jobs",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found", body = crate::modules::jobs::application::domain::entities::JobEnvelope),
        (status = 404, description = "Job not found", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    )
)]
#[get("/api/v1/jobs/{id}")]
pub async fn get_job_handler(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    match data.jobs.get_job(&path.into_inner()).await {
        Ok(job) => ApiResponse::success(job),
        Err(e) => relay_failure(e, "Failed to fetch job"),
    }
}

use actix_web::{get, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/applications/{id}",
    tag = "Applications",
    params(("id" = String, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application with notes and timeline", body = crate::modules::applications::application::domain::entities::ApplicationEnvelope),
        (status = 404, description = "Application not found", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/applications/{id}")]
pub async fn get_application_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.applications.get(&path.into_inner()).await {
        Ok(application) => ApiResponse::success(application),
        Err(e) => relay_failure(e, "Failed to fetch application"),
    }
}

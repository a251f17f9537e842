use actix_web::{get, put, web, Responder};
use serde_json::Value;

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/candidates/{id}",
    tag = "Candidates",
    params(("id" = String, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Candidate profile", body = crate::modules::candidates::application::domain::entities::CandidateEnvelope),
        (status = 404, description = "Candidate not found", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/candidates/{id}")]
pub async fn get_candidate_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.candidates.get_candidate(&path.into_inner()).await {
        Ok(candidate) => ApiResponse::success(candidate),
        Err(e) => relay_failure(e, "Failed to fetch candidate"),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/candidates/{id}",
    tag = "Candidates",
    params(("id" = String, Path, description = "Candidate ID")),
    request_body(content = Object, description = "CandidateProfileInput"),
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Invalid body", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/candidates/{id}")]
pub async fn update_candidate_handler(
    _token: BearerToken,
    path: web::Path<String>,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .candidates
        .update_candidate(&path.into_inner(), body.into_inner())
        .await
    {
        Ok(candidate) => ApiResponse::success(candidate),
        Err(e) => relay_failure(e, "Failed to update candidate"),
    }
}

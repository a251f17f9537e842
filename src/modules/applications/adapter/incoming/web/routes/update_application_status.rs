use actix_web::{post, put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::applications::application::domain::{BulkStatusChange, StatusChange};
use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    #[schema(example = "INTERVIEWING")]
    pub status: String,
    pub note: Option<String>,
}

impl From<UpdateStatusRequest> for StatusChange {
    fn from(req: UpdateStatusRequest) -> Self {
        StatusChange {
            status: req.status,
            note: req.note,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkUpdateStatusRequest {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(default)]
    #[schema(example = "REJECTED")]
    pub status: String,
}

impl From<BulkUpdateStatusRequest> for BulkStatusChange {
    fn from(req: BulkUpdateStatusRequest) -> Self {
        BulkStatusChange {
            ids: req.ids,
            status: req.status,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    put,
    path = "/api/v1/applications/{id}/status",
    tag = "Applications",
    params(("id" = String, Path, description = "Application ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated; candidate notification queued"),
        (status = 400, description = "Status missing", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/v1/applications/{id}/status")]
pub async fn update_application_status_handler(
    _token: BearerToken,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .applications
        .update_status(&path.into_inner(), body.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => relay_failure(e, "Failed to update application status"),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/applications/bulk-update",
    tag = "Applications",
    request_body = BulkUpdateStatusRequest,
    responses(
        (status = 200, description = "Statuses updated"),
        (status = 400, description = "IDs or status missing", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/applications/bulk-update")]
pub async fn bulk_update_status_handler(
    _token: BearerToken,
    body: web::Json<BulkUpdateStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .applications
        .bulk_update_status(body.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => relay_failure(e, "Failed to update application statuses"),
    }
}

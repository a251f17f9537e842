use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::applications::application::domain::NewNote;
use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_internal: bool,
}

impl From<AddNoteRequest> for NewNote {
    fn from(req: AddNoteRequest) -> Self {
        NewNote {
            content: req.content,
            is_internal: req.is_internal,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/applications/{id}/notes",
    tag = "Applications",
    params(("id" = String, Path, description = "Application ID")),
    request_body = AddNoteRequest,
    responses(
        (status = 201, description = "Note added"),
        (status = 400, description = "Content missing", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/applications/{id}/notes")]
pub async fn add_application_note_handler(
    _token: BearerToken,
    path: web::Path<String>,
    body: web::Json<AddNoteRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .applications
        .add_note(&path.into_inner(), body.into_inner().into())
        .await
    {
        Ok(note) => ApiResponse::created(note),
        Err(e) => relay_failure(e, "Failed to add note"),
    }
}

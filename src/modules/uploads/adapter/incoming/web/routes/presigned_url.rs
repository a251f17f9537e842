use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::uploads::adapter::incoming::web::upload_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PresignedUrlRequest {
    #[schema(example = "resume.pdf")]
    pub filename: String,
    #[schema(example = "application/pdf")]
    pub content_type: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/upload/presigned-url",
    tag = "Uploads",
    request_body = PresignedUrlRequest,
    responses(
        (status = 200, description = "Signed PUT URL valid for 15 minutes", body = crate::modules::uploads::application::domain::entities::PresignedUpload),
        (status = 400, description = "Invalid body, file type or content type", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Signing failure", body = crate::shared::api::ErrorBody)
    )
)]
#[post("/api/v1/upload/presigned-url")]
pub async fn presigned_url_handler(
    body: web::Json<PresignedUrlRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .uploads
        .presign_upload(&body.filename, &body.content_type)
        .await
    {
        Ok(presigned) => ApiResponse::success(presigned),
        Err(e) => upload_failure(e, "Failed to generate presigned URL"),
    }
}

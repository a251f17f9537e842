use actix_multipart::form::{bytes::Bytes as FormBytes, MultipartForm};
use actix_web::{post, web, Responder};
use utoipa::ToSchema;

use crate::modules::uploads::adapter::incoming::web::upload_failure;
use crate::modules::uploads::application::domain::entities::ResumeFile;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, MultipartForm, ToSchema)]
pub struct ResumeUploadForm {
    /// PDF, DOC or DOCX, at most 10MB
    #[schema(value_type = String, format = Binary)]
    pub file: FormBytes,
}

#[utoipa::path(
    post,
    path = "/api/v1/upload/resume",
    tag = "Uploads",
    request_body(content = ResumeUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Resume stored", body = crate::modules::uploads::application::domain::entities::UploadedResume),
        (status = 400, description = "Missing file, wrong type or too large", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::shared::api::ErrorBody)
    )
)]
#[post("/api/v1/upload/resume")]
pub async fn upload_resume_handler(
    MultipartForm(form): MultipartForm<ResumeUploadForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let file = ResumeFile {
        original_filename: form.file.file_name.unwrap_or_default(),
        bytes: form.file.data.to_vec(),
    };

    match data.uploads.upload_resume(file).await {
        Ok(uploaded) => ApiResponse::success(uploaded),
        Err(e) => upload_failure(e, "Failed to upload file"),
    }
}

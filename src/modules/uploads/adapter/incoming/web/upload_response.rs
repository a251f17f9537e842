use actix_web::HttpResponse;
use tracing::error;

use crate::modules::uploads::application::ports::incoming::UploadError;
use crate::shared::api::ApiResponse;

/// Validation failures become 400 with their own message; storage failures
/// become 500 with `failure`.
pub fn upload_failure(err: UploadError, failure: &str) -> HttpResponse {
    match err {
        UploadError::Storage(e) => {
            error!(error = %e, "{}", failure);
            ApiResponse::internal_error(failure)
        }
        other => ApiResponse::bad_request(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::uploads::application::ports::outgoing::StorageError;
    use actix_web::{body::to_bytes, http::StatusCode};
    use serde_json::Value;

    async fn body_of(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn validation_errors_are_400() {
        let resp = upload_failure(UploadError::InvalidContentType, "Failed to generate presigned URL");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(resp).await["message"], "Invalid content type");
    }

    #[actix_web::test]
    async fn storage_errors_hide_details() {
        let resp = upload_failure(
            UploadError::Storage(StorageError::AccessDenied),
            "Failed to upload file",
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(resp).await["message"], "Failed to upload file");
    }
}

use async_trait::async_trait;

use crate::modules::uploads::application::domain::entities::{
    PresignedUpload, ResumeFile, UploadedResume,
};
use crate::modules::uploads::application::ports::outgoing::StorageError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("Invalid file type. Only PDF, DOC, and DOCX are allowed")]
    InvalidFileType,

    #[error("File too large. Maximum size is 10MB")]
    FileTooLarge,

    #[error("Invalid content type")]
    InvalidContentType,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UploadUseCases: Send + Sync {
    async fn upload_resume(&self, file: ResumeFile) -> Result<UploadedResume, UploadError>;

    async fn presign_upload(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<PresignedUpload, UploadError>;

    async fn delete_file(&self, key: &str) -> Result<(), UploadError>;

    fn public_url(&self, key: &str) -> String;
}

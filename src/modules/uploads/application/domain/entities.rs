use serde::Serialize;
use utoipa::ToSchema;

/// A resume received through the multipart form.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedResume {
    pub success: bool,
    /// Public URL of the stored object
    pub url: String,
    /// Object key
    #[schema(example = "resumes/2026/10/5f0c1f9e-3a55-4a0e-9f59-0d7f1c3c2b11.pdf")]
    pub filename: String,
    pub original_filename: String,
    pub size: u64,
    #[schema(example = "application/pdf")]
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    pub success: bool,
    /// Signed PUT URL
    pub upload_url: String,
    pub key: String,
    /// Object URL once uploaded
    pub url: String,
    /// Seconds
    #[schema(example = 900)]
    pub expires_in: u64,
}

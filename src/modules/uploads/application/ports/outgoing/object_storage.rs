use async_trait::async_trait;
use std::time::Duration;

// ============================================================================
// Domain Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NewObject {
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub metadata: Vec<(String, String)>,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Infrastructure error occurred")]
    Infrastructure,

    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Invalid configuration")]
    Configuration,
}

// ============================================================================
// Port Interface
// ============================================================================

/// Port for the object store holding uploaded resumes.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_object(&self, object: NewObject) -> Result<(), StorageError>;

    /// Signed URL a client can PUT the object to directly.
    async fn sign_upload_url(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, StorageError>;

    /// Deleting a missing object succeeds.
    async fn delete_object(&self, key: &str) -> Result<(), StorageError>;

    fn public_url(&self, key: &str) -> String;
}

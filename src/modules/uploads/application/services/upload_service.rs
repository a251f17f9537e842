use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::uploads::application::domain::entities::{
    PresignedUpload, ResumeFile, UploadedResume,
};
use crate::modules::uploads::application::domain::policies::UploadPolicy;
use crate::modules::uploads::application::ports::incoming::{UploadError, UploadUseCases};
use crate::modules::uploads::application::ports::outgoing::{NewObject, ObjectStorage};

#[derive(Clone)]
pub struct UploadService {
    storage: Arc<dyn ObjectStorage + Send + Sync>,
    policy: UploadPolicy,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage + Send + Sync>) -> Self {
        Self {
            storage,
            policy: UploadPolicy::default(),
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }
}

/// Drops the query string, leaving the URL the object is reachable at.
fn strip_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

#[async_trait]
impl UploadUseCases for UploadService {
    async fn upload_resume(&self, file: ResumeFile) -> Result<UploadedResume, UploadError> {
        let (ext, content_type) = self
            .policy
            .content_type_for(&file.original_filename)
            .ok_or(UploadError::InvalidFileType)?;

        let size = file.bytes.len() as u64;
        if !self.policy.within_size(size) {
            return Err(UploadError::FileTooLarge);
        }

        let now = Utc::now();
        let key = self.policy.object_key(&ext, now);

        self.storage
            .put_object(NewObject {
                key: key.clone(),
                content_type: content_type.to_string(),
                bytes: file.bytes,
                metadata: vec![
                    ("original-filename".into(), file.original_filename.clone()),
                    (
                        "uploaded-at".into(),
                        now.to_rfc3339_opts(SecondsFormat::Secs, true),
                    ),
                ],
            })
            .await
            .map_err(|e| {
                error!(error = %e, key = %key, "Failed to store resume");
                e
            })?;

        info!(key = %key, size, "Resume uploaded");

        Ok(UploadedResume {
            success: true,
            url: self.storage.public_url(&key),
            filename: key,
            original_filename: file.original_filename,
            size,
            content_type: content_type.to_string(),
        })
    }

    async fn presign_upload(
        &self,
        filename: &str,
        content_type: &str,
    ) -> Result<PresignedUpload, UploadError> {
        let (ext, expected) = self
            .policy
            .content_type_for(filename)
            .ok_or(UploadError::InvalidFileType)?;
        if content_type != expected {
            return Err(UploadError::InvalidContentType);
        }

        let key = self.policy.object_key(&ext, Utc::now());
        let ttl = self.policy.signed_url_ttl;

        let upload_url = self
            .storage
            .sign_upload_url(&key, content_type, ttl)
            .await
            .map_err(|e| {
                error!(error = %e, key = %key, "Failed to sign upload URL");
                e
            })?;

        Ok(PresignedUpload {
            success: true,
            url: strip_query(&upload_url).to_string(),
            upload_url,
            key,
            expires_in: ttl.as_secs(),
        })
    }

    async fn delete_file(&self, key: &str) -> Result<(), UploadError> {
        self.storage.delete_object(key).await?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        self.storage.public_url(key)
    }
}

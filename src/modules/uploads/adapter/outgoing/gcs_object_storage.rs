use actix_web::web::Bytes;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::modules::uploads::application::ports::outgoing::{
    NewObject, ObjectStorage, StorageError,
};

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_storage_error(msg: &str) -> StorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        StorageError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        StorageError::BucketNotFound
    } else if m.contains("invalid") || m.contains("config") {
        StorageError::Configuration
    } else {
        StorageError::Infrastructure
    }
}

fn is_missing_object(msg: &str) -> bool {
    let m = msg.to_lowercase();
    !m.contains("bucket") && (m.contains("404") || m.contains("not found"))
}

/// Seam over google-cloud-storage so the adapter can be tested with a fake.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, String>;

    async fn upload_bytes(
        &self,
        bucket_resource: &str,
        object: NewObject,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        self.0
            .sign_put_url(bucket_resource, object_name, content_type, ttl)
            .await
    }

    async fn upload_bytes(&self, bucket_resource: &str, object: NewObject) -> Result<(), String> {
        self.0.upload_bytes(bucket_resource, object).await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Resume bucket on Google Cloud Storage.
#[derive(Clone)]
pub struct GcsObjectStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
    public_base_url: String,
}

impl GcsObjectStorage {
    /// Client is initialized lazily on first use, so startup never touches GCS.
    pub fn new(bucket: impl Into<String>, public_base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: bucket.into(),
            public_base_url: public_base_url.into(),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, StorageError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok::<_, Box<dyn std::error::Error + Send + Sync>>(
                    Box::new(real_client) as Box<dyn GcsClient>
                )
            })
            .await
            .map(|boxed| &**boxed)
            .map_err(|e| {
                tracing::error!(error = %e, "GCS client unavailable");
                StorageError::Infrastructure
            })
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str, public_base_url: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
            public_base_url: public_base_url.to_string(),
        }
    }
}

#[async_trait]
impl ObjectStorage for GcsObjectStorage {
    async fn put_object(&self, object: NewObject) -> Result<(), StorageError> {
        let client = self.get_client().await?;

        client
            .upload_bytes(&bucket_resource(&self.bucket), object)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "GCS upload failed");
                map_storage_error(&e)
            })
    }

    async fn sign_upload_url(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, StorageError> {
        let client = self.get_client().await?;

        client
            .sign_put_url(&bucket_resource(&self.bucket), key, content_type, ttl)
            .await
            .map_err(|e| map_storage_error(&e))
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let client = self.get_client().await?;

        match client.delete_object(&bucket_resource(&self.bucket), key).await {
            Ok(()) => Ok(()),
            Err(e) if is_missing_object(&e) => Ok(()),
            Err(e) => Err(map_storage_error(&e)),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_base_url.trim_end_matches('/'),
            self.bucket,
            key
        )
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
    signer: google_cloud_auth::signer::Signer,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        let signer = google_cloud_auth::credentials::Builder::default()
            .build_signer()
            .map_err(|e| {
                tracing::error!("Failed to build GCS signer: {:?}", e);
                if e.to_string().contains("authorized_user") {
                    tracing::error!(
                        "Signed URLs require a service account key. \
                         Set GOOGLE_APPLICATION_CREDENTIALS to a service-account JSON (type=service_account)."
                    );
                }
                e
            })?;

        tracing::info!("GCS client ready");

        Ok(Self {
            storage,
            control,
            signer,
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn sign_put_url(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, String> {
        google_cloud_storage::builder::storage::SignedUrlBuilder::for_object(
            bucket_resource.to_string(),
            object_name.to_string(),
        )
        .with_method(google_cloud_storage::http::Method::PUT)
        .with_header("content-type", content_type)
        .with_expiration(ttl)
        .sign_with(&self.signer)
        .await
        .map_err(|e| e.to_string())
    }

    async fn upload_bytes(&self, bucket_resource: &str, object: NewObject) -> Result<(), String> {
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object.key,
                Bytes::from(object.bytes),
            )
            .set_content_type(object.content_type)
            .set_metadata(object.metadata)
            .send_buffered()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource)
            .set_object(object_name)
            .send()
            .await
            .map_err(|e| e.to_string())
    }
}

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::gateway::application::relay::RelayError;
use crate::modules::jobs::application::domain::JobFilter;
use crate::shared::query::Pagination;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Cases)
// ──────────────────────────────────────────────────────────
//

/// Job operations. Every method relays one upstream document and returns the
/// upstream `data` object untouched.
#[async_trait]
pub trait JobUseCases: Send + Sync {
    async fn list_jobs(&self, filter: JobFilter, page: Pagination) -> Result<Value, RelayError>;

    async fn get_job(&self, id: &str) -> Result<Value, RelayError>;

    async fn create_job(&self, body: Value) -> Result<Value, RelayError>;

    async fn update_job(&self, id: &str, body: Value) -> Result<Value, RelayError>;

    async fn publish_job(&self, id: &str) -> Result<Value, RelayError>;

    async fn close_job(&self, id: &str) -> Result<Value, RelayError>;

    async fn delete_job(&self, id: &str) -> Result<Value, RelayError>;

    async fn increment_view(&self, id: &str) -> Result<Value, RelayError>;

    async fn generate_description(&self, body: Value) -> Result<Value, RelayError>;
}

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::applications::application::domain::{
    ApplicationFilter, BulkStatusChange, NewNote, StatusChange,
};
use crate::modules::gateway::application::relay::RelayError;
use crate::shared::query::Pagination;

#[async_trait]
pub trait ApplicationUseCases: Send + Sync {
    /// Public submission. Queues a confirmation email once upstream accepts it.
    async fn submit(&self, body: Value) -> Result<Value, RelayError>;

    async fn list(&self, filter: ApplicationFilter, page: Pagination) -> Result<Value, RelayError>;

    async fn get(&self, id: &str) -> Result<Value, RelayError>;

    async fn update_status(&self, id: &str, change: StatusChange) -> Result<Value, RelayError>;

    async fn bulk_update_status(&self, change: BulkStatusChange) -> Result<Value, RelayError>;

    async fn add_note(&self, id: &str, note: NewNote) -> Result<Value, RelayError>;

    async fn score(&self, id: &str) -> Result<Value, RelayError>;
}

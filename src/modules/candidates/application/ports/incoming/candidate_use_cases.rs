use async_trait::async_trait;
use serde_json::Value;

use crate::modules::gateway::application::relay::RelayError;

#[async_trait]
pub trait CandidateUseCases: Send + Sync {
    async fn get_candidate(&self, id: &str) -> Result<Value, RelayError>;

    async fn update_candidate(&self, id: &str, body: Value) -> Result<Value, RelayError>;
}

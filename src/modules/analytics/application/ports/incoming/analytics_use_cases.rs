use async_trait::async_trait;
use serde_json::Value;

use crate::modules::analytics::application::domain::DateWindow;
use crate::modules::gateway::application::relay::RelayError;

#[async_trait]
pub trait AnalyticsUseCases: Send + Sync {
    async fn metrics(&self, window: DateWindow) -> Result<Value, RelayError>;

    async fn job_performance(&self, job_id: &str) -> Result<Value, RelayError>;

    async fn pipeline(&self, job_id: Option<String>) -> Result<Value, RelayError>;

    /// Metrics narrowed to `{applicationTrend}` when upstream reports one.
    async fn trends(&self, window: DateWindow) -> Result<Value, RelayError>;
}

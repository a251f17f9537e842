use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::modules::analytics::application::domain::DateWindow;
use crate::modules::analytics::application::ports::incoming::AnalyticsUseCases;
use crate::modules::gateway::application::catalog::analytics as documents;
use crate::modules::gateway::application::ports::outgoing::{HrmsGateway, Variables};
use crate::modules::gateway::application::relay::{require_id, variables, RelayError};

pub struct AnalyticsService {
    gateway: Arc<dyn HrmsGateway + Send + Sync>,
}

impl AnalyticsService {
    pub fn new(gateway: Arc<dyn HrmsGateway + Send + Sync>) -> Self {
        Self { gateway }
    }
}

fn application_trend(data: Value) -> Value {
    match data.pointer("/recruitmentMetrics/applicationTrend") {
        Some(trend) => json!({ "applicationTrend": trend }),
        None => data,
    }
}

#[async_trait]
impl AnalyticsUseCases for AnalyticsService {
    async fn metrics(&self, window: DateWindow) -> Result<Value, RelayError> {
        let response = self
            .gateway
            .query(
                documents::GET_RECRUITMENT_METRICS,
                variables(window.to_variables()),
            )
            .await?;
        Ok(response.data)
    }

    async fn job_performance(&self, job_id: &str) -> Result<Value, RelayError> {
        let job_id = require_id(job_id, "Job ID is required")?;
        let response = self
            .gateway
            .query(
                documents::GET_JOB_PERFORMANCE,
                variables(json!({ "jobId": job_id })),
            )
            .await?;
        Ok(response.data)
    }

    async fn pipeline(&self, job_id: Option<String>) -> Result<Value, RelayError> {
        let mut vars = Variables::new();
        if let Some(job_id) = job_id.filter(|id| !id.is_empty()) {
            vars.insert("jobId".into(), Value::from(job_id));
        }

        let response = self
            .gateway
            .query(documents::GET_APPLICATION_PIPELINE, vars)
            .await?;
        Ok(response.data)
    }

    async fn trends(&self, window: DateWindow) -> Result<Value, RelayError> {
        let data = self.metrics(window).await?;
        Ok(application_trend(data))
    }
}

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::modules::gateway::application::catalog::jobs as documents;
use crate::modules::gateway::application::ports::outgoing::HrmsGateway;
use crate::modules::gateway::application::relay::{found, require_id, variables, RelayError};
use crate::modules::jobs::application::domain::JobFilter;
use crate::modules::jobs::application::ports::incoming::JobUseCases;
use crate::shared::input::MutationInput;
use crate::shared::query::Pagination;

pub const CREATE_JOB_REQUIRED: &[&str] = &[
    "title",
    "department",
    "location",
    "employmentType",
    "experienceLevel",
    "description",
    "requirements",
    "skills",
];

pub const GENERATE_DESCRIPTION_REQUIRED: &[&str] =
    &["title", "department", "experienceLevel", "keySkills"];

const JOB_ID_REQUIRED: &str = "Job ID is required";

pub struct JobService {
    gateway: Arc<dyn HrmsGateway + Send + Sync>,
}

impl JobService {
    pub fn new(gateway: Arc<dyn HrmsGateway + Send + Sync>) -> Self {
        Self { gateway }
    }

    async fn by_id(&self, document: &str, id: &str) -> Result<Value, RelayError> {
        let id = require_id(id, JOB_ID_REQUIRED)?;
        let response = self
            .gateway
            .mutate(document, variables(json!({ "id": id })))
            .await?;
        Ok(response.data)
    }
}

#[async_trait]
impl JobUseCases for JobService {
    async fn list_jobs(&self, filter: JobFilter, page: Pagination) -> Result<Value, RelayError> {
        let vars = variables(json!({
            "filters": filter.to_variables(),
            "limit": page.limit,
            "offset": page.offset,
        }));

        let response = self.gateway.query(documents::GET_JOBS, vars).await?;
        Ok(response.data)
    }

    async fn get_job(&self, id: &str) -> Result<Value, RelayError> {
        let id = require_id(id, JOB_ID_REQUIRED)?;
        let response = self
            .gateway
            .query(documents::GET_JOB, variables(json!({ "id": id })))
            .await?;
        found(response.data, "Job")
    }

    async fn create_job(&self, body: Value) -> Result<Value, RelayError> {
        let input = MutationInput::from_value(body)?;
        input.require(CREATE_JOB_REQUIRED)?;

        let response = self
            .gateway
            .mutate(
                documents::CREATE_JOB,
                variables(json!({ "input": input.into_value() })),
            )
            .await?;
        Ok(response.data)
    }

    async fn update_job(&self, id: &str, body: Value) -> Result<Value, RelayError> {
        let id = require_id(id, JOB_ID_REQUIRED)?;
        let input = MutationInput::from_value(body)?;

        let response = self
            .gateway
            .mutate(
                documents::UPDATE_JOB,
                variables(json!({ "id": id, "input": input.into_value() })),
            )
            .await?;
        Ok(response.data)
    }

    async fn publish_job(&self, id: &str) -> Result<Value, RelayError> {
        self.by_id(documents::PUBLISH_JOB, id).await
    }

    async fn close_job(&self, id: &str) -> Result<Value, RelayError> {
        self.by_id(documents::CLOSE_JOB, id).await
    }

    async fn delete_job(&self, id: &str) -> Result<Value, RelayError> {
        self.by_id(documents::DELETE_JOB, id).await
    }

    async fn increment_view(&self, id: &str) -> Result<Value, RelayError> {
        let data = self.by_id(documents::INCREMENT_JOB_VIEW, id).await?;
        debug!(job_id = id, "Job view recorded");
        Ok(data)
    }

    async fn generate_description(&self, body: Value) -> Result<Value, RelayError> {
        let input = MutationInput::from_value(body)?;
        input.require(GENERATE_DESCRIPTION_REQUIRED)?;

        let response = self
            .gateway
            .mutate(
                documents::GENERATE_JOB_DESCRIPTION,
                variables(json!({ "input": input.into_value() })),
            )
            .await?;
        Ok(response.data)
    }
}

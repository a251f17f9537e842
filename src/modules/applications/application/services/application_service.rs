use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::applications::application::domain::{
    ApplicationFilter, BulkStatusChange, NewNote, StatusChange,
};
use crate::modules::applications::application::ports::incoming::ApplicationUseCases;
use crate::modules::email::application::ports::outgoing::ApplicationConfirmation;
use crate::modules::email::application::services::{Notification, NotificationDispatcher};
use crate::modules::gateway::application::catalog::applications as documents;
use crate::modules::gateway::application::ports::outgoing::HrmsGateway;
use crate::modules::gateway::application::relay::{found, require_id, variables, RelayError};
use crate::shared::input::MutationInput;
use crate::shared::query::Pagination;

pub const SUBMIT_APPLICATION_REQUIRED: &[&str] = &[
    "jobId",
    "firstName",
    "lastName",
    "email",
    "phone",
    "resumeUrl",
    "currentLocation",
    "availability",
];

const APPLICATION_ID_REQUIRED: &str = "Application ID is required";

pub struct ApplicationService {
    gateway: Arc<dyn HrmsGateway + Send + Sync>,
    notifications: NotificationDispatcher,
}

impl ApplicationService {
    pub fn new(
        gateway: Arc<dyn HrmsGateway + Send + Sync>,
        notifications: NotificationDispatcher,
    ) -> Self {
        Self {
            gateway,
            notifications,
        }
    }

    fn queue_confirmation(&self, input: &MutationInput) {
        let fields = (
            input.get_str("email"),
            input.get_str("firstName"),
            input.get_str("jobId"),
        );

        match fields {
            (Some(email), Some(first_name), Some(job_id)) => {
                self.notifications
                    .dispatch(Notification::ApplicationConfirmation(ApplicationConfirmation {
                        email: email.to_string(),
                        first_name: first_name.to_string(),
                        job_id: job_id.to_string(),
                    }));
            }
            _ => warn!("Application accepted but contact fields are not strings, skipping confirmation"),
        }
    }
}

#[async_trait]
impl ApplicationUseCases for ApplicationService {
    async fn submit(&self, body: Value) -> Result<Value, RelayError> {
        let mut input = MutationInput::from_value(body)?;
        input.require(SUBMIT_APPLICATION_REQUIRED)?;
        input.default_bool("willingToRelocate", false);

        let response = self
            .gateway
            .mutate(
                documents::SUBMIT_APPLICATION,
                variables(json!({ "input": input.clone().into_value() })),
            )
            .await?;

        info!(job_id = input.get_str("jobId"), "Application submitted");
        self.queue_confirmation(&input);

        Ok(response.data)
    }

    async fn list(&self, filter: ApplicationFilter, page: Pagination) -> Result<Value, RelayError> {
        let mut vars = variables(json!({ "limit": page.limit, "offset": page.offset }));
        if let Some(filters) = filter.to_variables() {
            vars.insert("filters".into(), filters);
        }

        let response = self.gateway.query(documents::GET_APPLICATIONS, vars).await?;
        Ok(response.data)
    }

    async fn get(&self, id: &str) -> Result<Value, RelayError> {
        let id = require_id(id, APPLICATION_ID_REQUIRED)?;
        let response = self
            .gateway
            .query(documents::GET_APPLICATION, variables(json!({ "id": id })))
            .await?;
        found(response.data, "Application")
    }

    async fn update_status(&self, id: &str, change: StatusChange) -> Result<Value, RelayError> {
        let id = require_id(id, APPLICATION_ID_REQUIRED)?;
        if change.status.is_empty() {
            return Err(RelayError::Validation("Status is required"));
        }

        let mut vars = variables(json!({ "id": id, "status": change.status }));
        if let Some(note) = change.note.filter(|n| !n.is_empty()) {
            vars.insert("note".into(), Value::from(note));
        }

        let response = self
            .gateway
            .mutate(documents::UPDATE_APPLICATION_STATUS, vars)
            .await?;

        self.notifications.dispatch(Notification::StatusUpdate {
            application_id: id.to_string(),
            status: change.status,
        });

        Ok(response.data)
    }

    async fn bulk_update_status(&self, change: BulkStatusChange) -> Result<Value, RelayError> {
        if change.ids.is_empty() {
            return Err(RelayError::Validation("Application IDs are required"));
        }
        if change.status.is_empty() {
            return Err(RelayError::Validation("Status is required"));
        }

        let response = self
            .gateway
            .mutate(
                documents::BULK_UPDATE_APPLICATION_STATUS,
                variables(json!({ "ids": change.ids, "status": change.status })),
            )
            .await?;
        Ok(response.data)
    }

    async fn add_note(&self, id: &str, note: NewNote) -> Result<Value, RelayError> {
        let id = require_id(id, APPLICATION_ID_REQUIRED)?;
        if note.content.is_empty() {
            return Err(RelayError::Validation("Note content is required"));
        }

        let response = self
            .gateway
            .mutate(
                documents::ADD_APPLICATION_NOTE,
                variables(json!({
                    "applicationId": id,
                    "content": note.content,
                    "isInternal": note.is_internal,
                })),
            )
            .await?;
        Ok(response.data)
    }

    async fn score(&self, id: &str) -> Result<Value, RelayError> {
        let id = require_id(id, APPLICATION_ID_REQUIRED)?;
        let response = self
            .gateway
            .mutate(
                documents::SCORE_APPLICATION,
                variables(json!({ "applicationId": id })),
            )
            .await?;
        Ok(response.data)
    }
}

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::modules::candidates::application::ports::incoming::CandidateUseCases;
use crate::modules::gateway::application::catalog::candidates as documents;
use crate::modules::gateway::application::ports::outgoing::HrmsGateway;
use crate::modules::gateway::application::relay::{found, require_id, variables, RelayError};
use crate::shared::input::MutationInput;

const CANDIDATE_ID_REQUIRED: &str = "Candidate ID is required";

pub struct CandidateService {
    gateway: Arc<dyn HrmsGateway + Send + Sync>,
}

impl CandidateService {
    pub fn new(gateway: Arc<dyn HrmsGateway + Send + Sync>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CandidateUseCases for CandidateService {
    async fn get_candidate(&self, id: &str) -> Result<Value, RelayError> {
        let id = require_id(id, CANDIDATE_ID_REQUIRED)?;
        let response = self
            .gateway
            .query(documents::GET_CANDIDATE, variables(json!({ "id": id })))
            .await?;
        found(response.data, "Candidate")
    }

    async fn update_candidate(&self, id: &str, body: Value) -> Result<Value, RelayError> {
        let id = require_id(id, CANDIDATE_ID_REQUIRED)?;
        let input = MutationInput::from_value(body)?;

        let response = self
            .gateway
            .mutate(
                documents::UPDATE_CANDIDATE_PROFILE,
                variables(json!({ "id": id, "input": input.into_value() })),
            )
            .await?;
        Ok(response.data)
    }
}

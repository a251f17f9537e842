//! Shared plumbing for services that relay a REST call to one GraphQL document.

use serde_json::{Map, Value};

use crate::modules::gateway::application::ports::outgoing::{GatewayError, Variables};
use crate::shared::input::InputError;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum RelayError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{0}")]
    Validation(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    Upstream(#[from] GatewayError),
}

/// Rejects blank path identifiers before anything goes upstream.
pub fn require_id<'a>(id: &'a str, message: &'static str) -> Result<&'a str, RelayError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RelayError::Validation(message));
    }
    Ok(id)
}

/// Maps a by-id payload to `NotFound` when upstream returned nothing: either
/// `data` itself is null, or its single root field is.
pub fn found(data: Value, entity: &'static str) -> Result<Value, RelayError> {
    match &data {
        Value::Null => Err(RelayError::NotFound(entity)),
        Value::Object(fields) if fields.len() == 1 && fields.values().all(Value::is_null) => {
            Err(RelayError::NotFound(entity))
        }
        _ => Ok(data),
    }
}

/// Turns a `json!({...})` literal into a variables map. Non-objects become an
/// empty map.
pub fn variables(value: Value) -> Variables {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

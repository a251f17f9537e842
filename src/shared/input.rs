// src/shared/input.rs
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid request body")]
    NotAnObject,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Mutation body forwarded to upstream as an opaque `input` object.
///
/// Only the fields this service inspects are ever read; everything else is
/// relayed untouched. Presence means the key exists, whatever its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationInput {
    fields: Map<String, Value>,
}

impl MutationInput {
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(InputError::NotAnObject),
        }
    }

    /// Checks each field in order and names the first absent one.
    pub fn require(&self, fields: &[&'static str]) -> Result<(), InputError> {
        match fields.iter().find(|f| !self.fields.contains_key(**f)) {
            Some(missing) => Err(InputError::MissingField(missing)),
            None => Ok(()),
        }
    }

    pub fn default_bool(&mut self, key: &str, value: bool) {
        self.fields
            .entry(key.to_string())
            .or_insert(Value::Bool(value));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

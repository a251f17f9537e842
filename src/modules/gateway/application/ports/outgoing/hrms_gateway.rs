use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Domain Types
// ============================================================================

/// Variables attached to a GraphQL document.
pub type Variables = Map<String, Value>;

/// Outbound envelope. Also used to validate bodies arriving at the proxy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQLRequest {
    pub query: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,

    #[serde(
        rename = "operationName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    pub fn new(document: &str, variables: Variables) -> Self {
        Self {
            query: document.to_string(),
            variables: (!variables.is_empty()).then_some(variables),
            operation_name: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

/// Decoded upstream envelope. `errors` may be non-empty alongside `data`;
/// partial results are still relayed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Value,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

impl GraphQLResponse {
    pub fn with_data(data: Value) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }
}

/// Raw passthrough request for the `/graphql` proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRequest {
    pub body: Vec<u8>,
    /// Caller's original `Authorization` header, forwarded as `X-User-Token`.
    pub user_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("failed to execute request: {0}")]
    Transport(String),

    #[error("Hub-HRMS returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("Hub-HRMS unreachable: {0}")]
    Unreachable(String),
}

// ============================================================================
// Port
// ============================================================================

#[async_trait]
pub trait HrmsGateway: Send + Sync {
    async fn query(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<GraphQLResponse, GatewayError>;

    /// GraphQL does not distinguish mutations at the transport level.
    async fn mutate(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<GraphQLResponse, GatewayError> {
        self.query(document, variables).await
    }

    async fn health(&self) -> Result<(), GatewayError>;

    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, GatewayError>;
}

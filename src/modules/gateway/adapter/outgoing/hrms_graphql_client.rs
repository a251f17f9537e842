use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, warn};

use crate::modules::gateway::application::catalog::HEALTH_PROBE;
use crate::modules::gateway::application::ports::outgoing::{
    GatewayError, GraphQLRequest, GraphQLResponse, HrmsGateway, ProxyRequest, ProxyResponse,
    Variables,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_TOKEN_HEADER: &str = "X-User-Token";

/// reqwest-backed client for the Hub-HRMS GraphQL endpoint.
///
/// Built once at startup; the inner `reqwest::Client` is the process-wide
/// connection pool.
#[derive(Clone)]
pub struct HrmsGraphqlClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl HrmsGraphqlClient {
    pub fn new(
        url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    fn post(&self, body: Vec<u8>) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        match &self.api_key {
            Some(key) => builder.header(AUTHORIZATION, format!("Bearer {}", key)),
            None => builder,
        }
    }
}

#[async_trait]
impl HrmsGateway for HrmsGraphqlClient {
    async fn query(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<GraphQLResponse, GatewayError> {
        let body = serde_json::to_vec(&GraphQLRequest::new(document, variables))
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        let response = self
            .post(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if status != reqwest::StatusCode::OK {
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let decoded: GraphQLResponse =
            serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))?;

        if !decoded.errors.is_empty() {
            let messages: Vec<&str> = decoded.errors.iter().map(|e| e.message.as_str()).collect();
            warn!(count = messages.len(), errors = ?messages, "GraphQL errors from Hub-HRMS");
        }

        Ok(decoded)
    }

    async fn health(&self) -> Result<(), GatewayError> {
        self.query(HEALTH_PROBE, Variables::new())
            .await
            .map(|_| ())
            .map_err(|e| GatewayError::Unreachable(e.to_string()))
    }

    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, GatewayError> {
        let mut builder = self.post(request.body);
        if let Some(token) = request.user_token {
            builder = builder.header(USER_TOKEN_HEADER, token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?
            .to_vec();

        debug!(status, bytes = body.len(), "Proxied GraphQL request");

        Ok(ProxyResponse {
            status,
            headers,
            body,
        })
    }
}

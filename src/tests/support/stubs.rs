use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::email::application::ports::outgoing::{
    ApplicationConfirmation, CandidateDecision, CandidateNotifier, EmailSendError,
    InterviewInvitation, NotificationError,
};
use crate::modules::email::application::services::Notification;
use crate::modules::gateway::application::ports::outgoing::{
    GatewayError, GraphQLResponse, HrmsGateway, ProxyRequest, ProxyResponse, Variables,
};
use crate::modules::uploads::application::ports::outgoing::{
    NewObject, ObjectStorage, StorageError,
};

/* --------------------------------------------------
 * Recording gateway
 * -------------------------------------------------- */

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayCall {
    pub document: String,
    pub variables: Variables,
}

struct GatewayState {
    calls: Vec<GatewayCall>,
    result: Result<GraphQLResponse, GatewayError>,
    health: Result<(), GatewayError>,
    health_delay: Option<Duration>,
    forwarded: Vec<ProxyRequest>,
    forward_result: Result<ProxyResponse, GatewayError>,
}

/// Upstream stand-in. Every `query`/`mutate` returns the same configured
/// result and is recorded.
#[derive(Clone)]
pub struct MockGateway {
    state: Arc<Mutex<GatewayState>>,
}

impl MockGateway {
    fn with_result(result: Result<GraphQLResponse, GatewayError>) -> Self {
        Self {
            state: Arc::new(Mutex::new(GatewayState {
                calls: Vec::new(),
                result,
                health: Ok(()),
                health_delay: None,
                forwarded: Vec::new(),
                forward_result: Ok(ProxyResponse {
                    status: 200,
                    headers: Vec::new(),
                    body: br#"{"data":{}}"#.to_vec(),
                }),
            })),
        }
    }

    pub fn returning(data: Value) -> Self {
        Self::with_result(Ok(GraphQLResponse::with_data(data)))
    }

    pub fn returning_response(response: GraphQLResponse) -> Self {
        Self::with_result(Ok(response))
    }

    pub fn failing(err: GatewayError) -> Self {
        Self::with_result(Err(err))
    }

    pub fn with_health(self, health: Result<(), GatewayError>) -> Self {
        self.state.lock().unwrap().health = health;
        self
    }

    pub fn with_health_delay(self, delay: Duration) -> Self {
        self.state.lock().unwrap().health_delay = Some(delay);
        self
    }

    pub fn with_forward(self, result: Result<ProxyResponse, GatewayError>) -> Self {
        self.state.lock().unwrap().forward_result = result;
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn forwarded(&self) -> Vec<ProxyRequest> {
        self.state.lock().unwrap().forwarded.clone()
    }
}

#[async_trait]
impl HrmsGateway for MockGateway {
    async fn query(
        &self,
        document: &str,
        variables: Variables,
    ) -> Result<GraphQLResponse, GatewayError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(GatewayCall {
            document: document.to_string(),
            variables,
        });
        state.result.clone()
    }

    async fn health(&self) -> Result<(), GatewayError> {
        let (delay, result) = {
            let state = self.state.lock().unwrap();
            (state.health_delay, state.health.clone())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn forward(&self, request: ProxyRequest) -> Result<ProxyResponse, GatewayError> {
        let mut state = self.state.lock().unwrap();
        state.forwarded.push(request);
        state.forward_result.clone()
    }
}

/* --------------------------------------------------
 * Recording notifier
 * -------------------------------------------------- */

/// Records every notification it is asked to send. The call is recorded
/// before the optional delay so callers can observe in-flight work.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
    delay: Option<Duration>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }

    /// Polls until `count` notifications arrived or `timeout` elapsed.
    pub async fn wait_for(&self, count: usize, timeout: Duration) {
        let deadline = tokio::time::Instant::now() + timeout;
        while self.received.lock().unwrap().len() < count
            && tokio::time::Instant::now() < deadline
        {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn record(&self, notification: Notification) -> Result<(), NotificationError> {
        self.received.lock().unwrap().push(notification);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(NotificationError::EmailSendingFailed(
                EmailSendError::Rejected(500),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CandidateNotifier for RecordingNotifier {
    async fn send_application_confirmation(
        &self,
        confirmation: &ApplicationConfirmation,
    ) -> Result<(), NotificationError> {
        self.record(Notification::ApplicationConfirmation(confirmation.clone()))
            .await
    }

    async fn send_status_update(
        &self,
        application_id: &str,
        status: &str,
    ) -> Result<(), NotificationError> {
        self.record(Notification::StatusUpdate {
            application_id: application_id.to_string(),
            status: status.to_string(),
        })
        .await
    }

    async fn send_interview_invitation(
        &self,
        invitation: &InterviewInvitation,
    ) -> Result<(), NotificationError> {
        self.record(Notification::InterviewInvitation(invitation.clone()))
            .await
    }

    async fn send_offer_letter(&self, decision: &CandidateDecision) -> Result<(), NotificationError> {
        self.record(Notification::OfferLetter(decision.clone())).await
    }

    async fn send_rejection(&self, decision: &CandidateDecision) -> Result<(), NotificationError> {
        self.record(Notification::Rejection(decision.clone())).await
    }
}

/* --------------------------------------------------
 * Recording object storage
 * -------------------------------------------------- */

pub const TEST_STORAGE_BASE: &str = "https://storage.test/resumes-bucket";

#[derive(Debug, Clone, PartialEq)]
pub struct SignCall {
    pub key: String,
    pub content_type: String,
    pub ttl: Duration,
}

#[derive(Default)]
struct StorageState {
    puts: Vec<NewObject>,
    signs: Vec<SignCall>,
    deletes: Vec<String>,
    failure: Option<StorageError>,
}

#[derive(Clone, Default)]
pub struct RecordingStorage {
    state: Arc<Mutex<StorageState>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: StorageError) -> Self {
        let storage = Self::default();
        storage.state.lock().unwrap().failure = Some(err);
        storage
    }

    pub fn puts(&self) -> Vec<NewObject> {
        self.state.lock().unwrap().puts.clone()
    }

    pub fn signs(&self) -> Vec<SignCall> {
        self.state.lock().unwrap().signs.clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.state.lock().unwrap().deletes.clone()
    }

    /// Total calls of any kind.
    pub fn call_count(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.puts.len() + state.signs.len() + state.deletes.len()
    }

    fn outcome(state: &StorageState) -> Result<(), StorageError> {
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn put_object(&self, object: NewObject) -> Result<(), StorageError> {
        let mut state = self.state.lock().unwrap();
        state.puts.push(object);
        Self::outcome(&state)
    }

    async fn sign_upload_url(
        &self,
        key: &str,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, StorageError> {
        let mut state = self.state.lock().unwrap();
        state.signs.push(SignCall {
            key: key.to_string(),
            content_type: content_type.to_string(),
            ttl,
        });
        Self::outcome(&state)?;
        Ok(format!(
            "{TEST_STORAGE_BASE}/{key}?X-Goog-Algorithm=GOOG4-RSA-SHA256&X-Goog-Signature=abc"
        ))
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock().unwrap();
        state.deletes.push(key.to_string());
        Self::outcome(&state)
    }

    fn public_url(&self, key: &str) -> String {
        format!("{TEST_STORAGE_BASE}/{key}")
    }
}

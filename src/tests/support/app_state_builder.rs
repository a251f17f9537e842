use crate::modules::analytics::application::services::AnalyticsService;
use crate::modules::applications::application::services::ApplicationService;
use crate::modules::candidates::application::services::CandidateService;
use crate::modules::email::application::services::NotificationDispatcher;
use crate::modules::gateway::application::ports::outgoing::HrmsGateway;
use crate::modules::jobs::application::services::JobService;
use crate::modules::uploads::application::services::UploadService;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use serde_json::json;
use std::sync::Arc;

/// Wires the real services over recording ports. Needs a running tokio
/// runtime because `build` starts the notification worker.
pub struct TestAppStateBuilder {
    gateway: MockGateway,
    notifier: RecordingNotifier,
    storage: RecordingStorage,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            gateway: MockGateway::returning(json!({})),
            notifier: RecordingNotifier::new(),
            storage: RecordingStorage::new(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_gateway(mut self, gateway: MockGateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn with_notifier(mut self, notifier: RecordingNotifier) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_storage(mut self, storage: RecordingStorage) -> Self {
        self.storage = storage;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let gateway: Arc<dyn HrmsGateway + Send + Sync> = Arc::new(self.gateway);
        // The worker keeps running after its handle is dropped.
        let (dispatcher, _worker) = NotificationDispatcher::start(Arc::new(self.notifier), 16);

        web::Data::new(AppState {
            gateway: gateway.clone(),
            jobs: Arc::new(JobService::new(gateway.clone())),
            applications: Arc::new(ApplicationService::new(gateway.clone(), dispatcher)),
            candidates: Arc::new(CandidateService::new(gateway.clone())),
            analytics: Arc::new(AnalyticsService::new(gateway)),
            uploads: Arc::new(UploadService::new(Arc::new(self.storage))),
        })
    }
}

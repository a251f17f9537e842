pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::analytics::application::ports::incoming::AnalyticsUseCases;
use crate::modules::analytics::application::services::AnalyticsService;
use crate::modules::applications::application::ports::incoming::ApplicationUseCases;
use crate::modules::applications::application::services::ApplicationService;
use crate::modules::candidates::application::ports::incoming::CandidateUseCases;
use crate::modules::candidates::application::services::CandidateService;
use crate::modules::auth::adapter::incoming::web::reject_malformed_authorization;
use crate::modules::email::adapter::outgoing::SendGridEmailSender;
use crate::modules::email::application::services::{
    NotificationDispatcher, RecruitingEmailService,
};
use crate::modules::gateway::adapter::outgoing::HrmsGraphqlClient;
use crate::modules::gateway::application::ports::outgoing::HrmsGateway;
use crate::modules::jobs::application::ports::incoming::JobUseCases;
use crate::modules::jobs::application::services::JobService;
use crate::modules::uploads::adapter::incoming::web::upload_form_config;
use crate::modules::uploads::adapter::outgoing::GcsObjectStorage;
use crate::modules::uploads::application::ports::incoming::UploadUseCases;
use crate::modules::uploads::application::services::UploadService;
use crate::shared::api::{custom_json_config, enforce_request_timeout, RequestTimeout};

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

/// Time queued notifications get to go out after the server stops.
const NOTIFICATION_DRAIN_GRACE: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn HrmsGateway + Send + Sync>,
    pub jobs: Arc<dyn JobUseCases + Send + Sync>,
    pub applications: Arc<dyn ApplicationUseCases + Send + Sync>,
    pub candidates: Arc<dyn CandidateUseCases + Send + Sync>,
    pub analytics: Arc<dyn AnalyticsUseCases + Send + Sync>,
    pub uploads: Arc<dyn UploadUseCases + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let server_url = config.server_url();

    // Upstream
    let hrms_client = HrmsGraphqlClient::new(
        config.hubhrms_url.clone(),
        config.hubhrms_api_key.clone(),
        config.hubhrms_timeout,
    )
    .map_err(std::io::Error::other)?;
    let gateway: Arc<dyn HrmsGateway + Send + Sync> = Arc::new(hrms_client);

    // Email
    let email_service = match &config.email.sendgrid_api_key {
        Some(api_key) => {
            let sender = SendGridEmailSender::new(
                api_key,
                &config.email.from_email,
                &config.email.from_name,
            )
            .map_err(std::io::Error::other)?
            .with_api_url(&config.email.sendgrid_api_url);
            RecruitingEmailService::new(Arc::new(sender))
        }
        None => {
            warn!("SENDGRID_API_KEY not set, candidate emails are disabled");
            RecruitingEmailService::disabled()
        }
    };
    let (dispatcher, notification_worker) = NotificationDispatcher::start(
        Arc::new(email_service),
        config.notification_queue_capacity,
    );

    // Storage
    let storage = GcsObjectStorage::new(
        config.storage_bucket.clone(),
        config.storage_public_base_url.clone(),
    );

    let state = AppState {
        gateway: gateway.clone(),
        jobs: Arc::new(JobService::new(gateway.clone())),
        applications: Arc::new(ApplicationService::new(gateway.clone(), dispatcher)),
        candidates: Arc::new(CandidateService::new(gateway.clone())),
        analytics: Arc::new(AnalyticsService::new(gateway)),
        uploads: Arc::new(UploadService::new(Arc::new(storage))),
    };

    let request_timeout = RequestTimeout(config.request_timeout);
    let allowed_origins = config.cors_allowed_origins.clone();
    let openapi = ApiDoc::openapi();

    info!(
        url = %server_url,
        environment = %config.environment,
        upstream = %config.hubhrms_url,
        "Server running"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(request_timeout)
            .app_data(custom_json_config())
            .app_data(upload_form_config())
            .wrap(from_fn(enforce_request_timeout))
            .wrap(from_fn(reject_malformed_authorization))
            .wrap(cors(&allowed_origins))
            .wrap(Logger::default())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    notification_worker.shutdown(NOTIFICATION_DRAIN_GRACE).await;
    info!("Server stopped");
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
        .expose_headers(vec![
            header::LINK,
            HeaderName::from_static("x-total-count"),
        ])
        .supports_credentials()
        .max_age(300);

    allowed_origins.iter().fold(cors, |cors, origin| {
        if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        }
    })
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::analytics::adapter::incoming::web::routes as analytics;
    use crate::modules::applications::adapter::incoming::web::routes as applications;
    use crate::modules::candidates::adapter::incoming::web::routes as candidates;
    use crate::modules::gateway::adapter::incoming::web::routes as gateway;
    use crate::modules::jobs::adapter::incoming::web::routes as jobs;
    use crate::modules::uploads::adapter::incoming::web::routes as uploads;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::liveness);
    cfg.service(crate::health::readiness);
    // Jobs
    cfg.service(jobs::generate_job_description_handler);
    cfg.service(jobs::list_jobs_handler);
    cfg.service(jobs::get_job_handler);
    cfg.service(jobs::increment_job_view_handler);
    cfg.service(jobs::create_job_handler);
    cfg.service(jobs::update_job_handler);
    cfg.service(jobs::publish_job_handler);
    cfg.service(jobs::close_job_handler);
    cfg.service(jobs::delete_job_handler);
    // Applications
    cfg.service(applications::bulk_update_status_handler);
    cfg.service(applications::submit_application_handler);
    cfg.service(applications::list_applications_handler);
    cfg.service(applications::get_application_handler);
    cfg.service(applications::update_application_status_handler);
    cfg.service(applications::add_application_note_handler);
    cfg.service(applications::score_application_handler);
    // Candidates
    cfg.service(candidates::get_candidate_handler);
    cfg.service(candidates::update_candidate_handler);
    // Analytics
    cfg.service(analytics::metrics_handler);
    cfg.service(analytics::job_performance_handler);
    cfg.service(analytics::pipeline_handler);
    cfg.service(analytics::trends_handler);
    // Uploads
    cfg.service(uploads::upload_resume_handler);
    cfg.service(uploads::presigned_url_handler);
    // Passthrough
    cfg.service(gateway::graphql_proxy_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}

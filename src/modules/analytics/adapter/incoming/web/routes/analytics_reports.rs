use actix_web::{get, web, Responder};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::analytics::application::domain::{DateWindow, DefaultSpan};
use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::shared::query::non_empty;
use crate::AppState;

const METRICS_SPAN: DefaultSpan = DefaultSpan::Days(30);
const TRENDS_SPAN: DefaultSpan = DefaultSpan::Months(3);

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    /// YYYY-MM-DD
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    pub end_date: Option<String>,
}

impl DateRangeQuery {
    fn window(&self, span: DefaultSpan) -> DateWindow {
        DateWindow::resolve(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            span,
            Utc::now(),
        )
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PipelineQuery {
    pub job_id: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/v1/analytics/metrics",
    tag = "Analytics",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Recruitment metrics; window defaults to the last 30 days", body = crate::modules::analytics::application::domain::entities::MetricsEnvelope),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/analytics/metrics")]
pub async fn metrics_handler(
    _token: BearerToken,
    query: web::Query<DateRangeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.analytics.metrics(query.window(METRICS_SPAN)).await {
        Ok(metrics) => ApiResponse::success(metrics),
        Err(e) => relay_failure(e, "Failed to fetch metrics"),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/jobs/{id}/performance",
    tag = "Analytics",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Views, applications and conversion for one job"),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/analytics/jobs/{id}/performance")]
pub async fn job_performance_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.analytics.job_performance(&path.into_inner()).await {
        Ok(performance) => ApiResponse::success(performance),
        Err(e) => relay_failure(e, "Failed to fetch job performance"),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/pipeline",
    tag = "Analytics",
    params(PipelineQuery),
    responses(
        (status = 200, description = "Applications per pipeline stage"),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/analytics/pipeline")]
pub async fn pipeline_handler(
    _token: BearerToken,
    query: web::Query<PipelineQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let job_id = non_empty(query.into_inner().job_id);

    match data.analytics.pipeline(job_id).await {
        Ok(pipeline) => ApiResponse::success(pipeline),
        Err(e) => relay_failure(e, "Failed to fetch pipeline"),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/analytics/trends",
    tag = "Analytics",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Application trend; window defaults to the last 3 months", body = crate::modules::analytics::application::domain::entities::TrendEnvelope),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/analytics/trends")]
pub async fn trends_handler(
    _token: BearerToken,
    query: web::Query<DateRangeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.analytics.trends(query.window(TRENDS_SPAN)).await {
        Ok(trends) => ApiResponse::success(trends),
        Err(e) => relay_failure(e, "Failed to fetch trends"),
    }
}

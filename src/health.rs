use actix_web::{get, web, HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::warn;
use utoipa::ToSchema;

use crate::modules::gateway::application::ports::outgoing::HrmsGateway;
use crate::AppState;

const HEALTH_BUDGET: Duration = Duration::from_secs(5);
const READINESS_BUDGET: Duration = Duration::from_secs(3);

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    #[schema(example = "healthy")]
    pub api: &'static str,
    #[schema(example = "healthy")]
    pub hubhrms: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    #[schema(example = "healthy")]
    pub status: &'static str,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeResponse {
    #[schema(example = "ready")]
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Hub-HRMS unreachable")]
    pub reason: Option<&'static str>,
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Runs the upstream probe within `budget`. Errors and timeouts are logged
/// and reported as unreachable.
async fn upstream_reachable(gateway: &dyn HrmsGateway, budget: Duration) -> bool {
    match tokio::time::timeout(budget, gateway.health()).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            warn!(error = %e, "Hub-HRMS health check failed");
            false
        }
        Err(_) => {
            warn!(budget_secs = budget.as_secs(), "Hub-HRMS health check timed out");
            false
        }
    }
}

/// OVERALL HEALTH
/// - Checks Hub-HRMS within 5s
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "All checks healthy", body = HealthResponse),
        (status = 503, description = "Hub-HRMS unreachable", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health(data: web::Data<AppState>) -> impl Responder {
    let reachable = upstream_reachable(data.gateway.as_ref(), HEALTH_BUDGET).await;

    let body = HealthResponse {
        status: if reachable { "healthy" } else { "degraded" },
        timestamp: now(),
        checks: HealthChecks {
            api: "healthy",
            hubhrms: if reachable { "healthy" } else { "unhealthy" },
        },
    };

    if reachable {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses((status = 200, description = "Process is alive", body = ProbeResponse))
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(ProbeResponse {
        status: "alive",
        timestamp: Some(now()),
        reason: None,
    })
}

/// READINESS PROBE
/// - Checks Hub-HRMS within 3s
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Ready to serve traffic", body = ProbeResponse),
        (status = 503, description = "Hub-HRMS unreachable", body = ProbeResponse)
    )
)]
#[get("/health/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    if upstream_reachable(data.gateway.as_ref(), READINESS_BUDGET).await {
        HttpResponse::Ok().json(ProbeResponse {
            status: "ready",
            timestamp: Some(now()),
            reason: None,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ProbeResponse {
            status: "not ready",
            timestamp: None,
            reason: Some("Hub-HRMS unreachable"),
        })
    }
}

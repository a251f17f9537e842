use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrendPoint {
    #[schema(example = "2026-10-01")]
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRates {
    pub view_to_apply: f64,
    pub apply_to_screen: f64,
    pub screen_to_interview: f64,
    pub interview_to_offer: f64,
    pub offer_to_accept: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusShare {
    pub status: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentMetrics {
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
    pub avg_applications_per_job: f64,
    pub avg_time_to_hire: f64,
    pub conversion_rates: Option<ConversionRates>,
    #[serde(default)]
    pub applications_by_status: Vec<StatusShare>,
    #[serde(default)]
    pub application_trend: Vec<TrendPoint>,
}

/// `GET /api/v1/analytics/metrics` payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsEnvelope {
    pub recruitment_metrics: RecruitmentMetrics,
}

/// `GET /api/v1/analytics/trends` payload when upstream reports a trend.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendEnvelope {
    pub application_trend: Vec<TrendPoint>,
}

//! Documented response shapes. Upstream JSON is relayed as-is.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Submitted,
    Reviewing,
    Interviewing,
    Offered,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiScore {
    #[schema(example = 82.5)]
    pub overall: f64,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    pub recommendation: Option<String>,
    pub generated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationNote {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub is_internal: bool,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub status: String,
    pub timestamp: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    pub id: String,
    pub title: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job: Option<EntityRef>,
    pub candidate: Option<EntityRef>,
    pub status: ApplicationStatus,
    pub applied_date: Option<String>,
    pub last_updated: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub ai_score: Option<AiScore>,
    #[serde(default)]
    pub notes: Vec<ApplicationNote>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

/// `GET /api/v1/applications/{id}` payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApplicationEnvelope {
    pub application: Application,
}

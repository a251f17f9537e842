//! Response shapes relayed from Hub-HRMS. Handlers pass upstream JSON through
//! untouched; these types document that JSON in the OpenAPI schema.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Draft,
    Published,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalaryRange {
    #[schema(example = 90000)]
    pub min: f64,
    #[schema(example = 120000)]
    pub max: f64,
    #[schema(example = "USD")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[schema(example = "job_01HZX3")]
    pub id: String,
    #[schema(example = "Senior Backend Engineer")]
    pub title: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "Berlin")]
    pub location: String,
    pub employment_type: EmploymentType,
    #[schema(example = "SENIOR")]
    pub experience_level: String,
    pub salary_range: Option<SalaryRange>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: JobStatus,
    pub posted_date: Option<String>,
    pub closing_date: Option<String>,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub application_count: u64,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(default)]
    pub urgent_hiring: bool,
}

/// `GET /api/v1/jobs` payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JobList {
    pub jobs: Vec<Job>,
}

/// `GET /api/v1/jobs/{id}` payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JobEnvelope {
    pub job: Job,
}

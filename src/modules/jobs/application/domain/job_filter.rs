use serde_json::{Map, Value};

/// Status applied when a job listing does not ask for one, so public callers
/// only ever see published jobs.
pub const DEFAULT_PUBLIC_STATUS: &str = "PUBLISHED";

/// Criteria accepted by the job listing. Built per request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    pub query: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub experience_level: Option<String>,
    pub remote_work: Option<bool>,
    pub status: Option<String>,
}

impl JobFilter {
    /// `JobFilters` input object. Single values become one-element lists, which
    /// is what the upstream schema expects.
    pub fn to_variables(&self) -> Value {
        let mut filters = Map::new();

        if let Some(query) = &self.query {
            filters.insert("query".into(), Value::from(query.as_str()));
        }
        for (key, value) in [
            ("departments", &self.department),
            ("locations", &self.location),
            ("employmentTypes", &self.employment_type),
            ("experienceLevels", &self.experience_level),
        ] {
            if let Some(v) = value {
                filters.insert(key.into(), Value::from(vec![v.as_str()]));
            }
        }
        if let Some(remote) = self.remote_work {
            filters.insert("remoteWork".into(), Value::Bool(remote));
        }

        let status = self.status.as_deref().unwrap_or(DEFAULT_PUBLIC_STATUS);
        filters.insert("status".into(), Value::from(status));

        Value::Object(filters)
    }
}

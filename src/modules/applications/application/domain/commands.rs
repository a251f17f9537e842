use serde_json::{Map, Value};

/// Criteria for the recruiter application list. Empty criteria send no
/// `filters` variable at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilter {
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub min_score: Option<f64>,
}

impl ApplicationFilter {
    pub fn to_variables(&self) -> Option<Value> {
        let mut filters = Map::new();

        for (key, value) in [
            ("jobId", &self.job_id),
            ("status", &self.status),
            ("dateFrom", &self.date_from),
            ("dateTo", &self.date_to),
        ] {
            if let Some(v) = value {
                filters.insert(key.into(), Value::from(v.as_str()));
            }
        }
        if let Some(score) = self.min_score {
            filters.insert("minScore".into(), Value::from(score));
        }

        (!filters.is_empty()).then_some(Value::Object(filters))
    }
}

/// Status strings are forwarded verbatim; Hub-HRMS owns the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub status: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkStatusChange {
    pub ids: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub content: String,
    pub is_internal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_filter_sends_nothing() {
        assert_eq!(ApplicationFilter::default().to_variables(), None);
    }

    #[test]
    fn only_present_criteria_are_sent() {
        let filter = ApplicationFilter {
            job_id: Some("j1".into()),
            min_score: Some(72.5),
            ..Default::default()
        };

        assert_eq!(
            filter.to_variables(),
            Some(json!({ "jobId": "j1", "minScore": 72.5 }))
        );
    }
}

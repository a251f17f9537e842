use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::modules::jobs::application::domain::JobFilter;
use crate::shared::query::{non_empty, parse_flag, Pagination};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// Everything arrives as text so bad numbers fall back instead of failing
/// extraction.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListJobsQuery {
    /// Free text search
    pub q: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    /// Older spelling of `employmentType`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub experience_level: Option<String>,
    /// `true`/`1`/`t`; anything else is false
    pub remote: Option<String>,
    /// Defaults to PUBLISHED
    pub status: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<ListJobsQuery> for (JobFilter, Pagination) {
    fn from(q: ListJobsQuery) -> Self {
        let page = Pagination::from_raw(q.limit.as_deref(), q.offset.as_deref());

        let filter = JobFilter {
            query: non_empty(q.q),
            department: non_empty(q.department),
            location: non_empty(q.location),
            employment_type: non_empty(q.employment_type).or_else(|| non_empty(q.kind)),
            experience_level: non_empty(q.experience_level),
            remote_work: non_empty(q.remote).map(|r| parse_flag(&r)),
            status: non_empty(q.status),
        };

        (filter, page)
    }
}

fn total_count(data: &Value) -> usize {
    data.get("jobs").and_then(Value::as_array).map_or(0, Vec::len)
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/v1/jobs",
    tag = "Jobs",
    params(ListJobsQuery),
    responses(
        (status = 200, description = "Jobs matching the filters", body = crate::modules::jobs::application::domain::entities::JobList,
            headers(("X-Total-Count" = usize, description = "Number of jobs in this page"))),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    )
)]
#[get("/api/v1/jobs")]
pub async fn list_jobs_handler(
    query: web::Query<ListJobsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    match data.jobs.list_jobs(filter, page).await {
        Ok(jobs) => HttpResponse::Ok()
            .insert_header(("X-Total-Count", total_count(&jobs).to_string()))
            .json(jobs),
        Err(e) => relay_failure(e, "Failed to fetch jobs"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gateway::application::ports::outgoing::GatewayError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockGateway;
    use actix_web::{http::StatusCode, App};
    use serde_json::json;

    #[test]
    fn type_is_alias_for_employment_type() {
        let query = ListJobsQuery {
            kind: Some("CONTRACT".into()),
            ..Default::default()
        };
        let (filter, _) = query.into();
        assert_eq!(filter.employment_type.as_deref(), Some("CONTRACT"));

        let query = ListJobsQuery {
            employment_type: Some("FULL_TIME".into()),
            kind: Some("CONTRACT".into()),
            ..Default::default()
        };
        let (filter, _) = query.into();
        assert_eq!(filter.employment_type.as_deref(), Some("FULL_TIME"));
    }

    #[test]
    fn unparsable_remote_is_false() {
        let query = ListJobsQuery {
            remote: Some("maybe".into()),
            ..Default::default()
        };
        let (filter, _) = query.into();
        assert_eq!(filter.remote_work, Some(false));
    }

    #[actix_web::test]
    async fn relays_jobs_with_total_count_header() {
        let gateway = MockGateway::returning(json!({ "jobs": [{ "id": "a" }, { "id": "b" }] }));
        let state = TestAppStateBuilder::default()
            .with_gateway(gateway.clone())
            .build();
        let app = actix_web::test::init_service(App::new().app_data(state).service(list_jobs_handler)).await;

        let req = actix_web::test::TestRequest::get()
            .uri("/api/v1/jobs?department=Engineering&remote=1&limit=500&offset=abc&unknown=x")
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "2");
        let body: Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body, json!({ "jobs": [{ "id": "a" }, { "id": "b" }] }));

        let vars = &gateway.calls()[0].variables;
        assert_eq!(vars["limit"], 20);
        assert_eq!(vars["offset"], 0);
        assert_eq!(
            vars["filters"],
            json!({ "departments": ["Engineering"], "remoteWork": true, "status": "PUBLISHED" })
        );
    }

    #[actix_web::test]
    async fn missing_jobs_array_counts_zero() {
        let gateway = MockGateway::returning(json!({ "jobs": null }));
        let state = TestAppStateBuilder::default().with_gateway(gateway).build();
        let app = actix_web::test::init_service(App::new().app_data(state).service(list_jobs_handler)).await;

        let req = actix_web::test::TestRequest::get().uri("/api/v1/jobs").to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("X-Total-Count").unwrap(), "0");
    }

    #[actix_web::test]
    async fn upstream_failure_is_500() {
        let gateway = MockGateway::failing(GatewayError::UpstreamStatus {
            status: 502,
            body: "bad gateway".into(),
        });
        let state = TestAppStateBuilder::default().with_gateway(gateway).build();
        let app = actix_web::test::init_service(App::new().app_data(state).service(list_jobs_handler)).await;

        let req = actix_web::test::TestRequest::get().uri("/api/v1/jobs").to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = actix_web::test::read_body_json(resp).await;
        assert_eq!(body["message"], "Failed to fetch jobs");
    }
}

use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::modules::applications::application::domain::ApplicationFilter;
use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::shared::query::{non_empty, Pagination};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListApplicationsQuery {
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// Decimal; ignored when unparsable
    pub min_score: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<ListApplicationsQuery> for (ApplicationFilter, Pagination) {
    fn from(q: ListApplicationsQuery) -> Self {
        let page = Pagination::from_raw(q.limit.as_deref(), q.offset.as_deref());

        let filter = ApplicationFilter {
            job_id: non_empty(q.job_id),
            status: non_empty(q.status),
            date_from: non_empty(q.date_from),
            date_to: non_empty(q.date_to),
            min_score: q
                .min_score
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|s| s.is_finite()),
        };

        (filter, page)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/v1/applications",
    tag = "Applications",
    params(ListApplicationsQuery),
    responses(
        (status = 200, description = "Applications matching the filters"),
        (status = 401, description = "Missing or malformed bearer token", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/v1/applications")]
pub async fn list_applications_handler(
    _token: BearerToken,
    query: web::Query<ListApplicationsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into();

    match data.applications.list(filter, page).await {
        Ok(applications) => ApiResponse::success(applications),
        Err(e) => relay_failure(e, "Failed to fetch applications"),
    }
}

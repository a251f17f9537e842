use actix_web::{post, web, Responder};
use tracing::warn;

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Best effort: the page view must never fail because the counter did.
#[utoipa::path(
    post,
    path = "/api/v1/jobs/{id}/view",
    tag = "Jobs",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Upstream `data` on success; `{success: false, message}` when the counter could not be moved", body = Object)
    )
)]
#[post("/api/v1/jobs/{id}/view")]
pub async fn increment_job_view_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.jobs.increment_view(&id).await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => {
            warn!(job_id = %id, error = %e, "Failed to increment job view");
            ApiResponse::acknowledged::<()>(false, "View count update failed", None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gateway::application::ports::outgoing::GatewayError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockGateway;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn upstream_failure_still_returns_200() {
        let gateway = MockGateway::failing(GatewayError::Transport("down".into()));
        let state = TestAppStateBuilder::default().with_gateway(gateway).build();
        let app =
            test::init_service(App::new().app_data(state).service(increment_job_view_handler))
                .await;

        let req = test::TestRequest::post().uri("/api/v1/jobs/j1/view").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "success": false, "message": "View count update failed" })
        );
    }

    #[actix_web::test]
    async fn success_reports_new_count() {
        let gateway =
            MockGateway::returning(json!({ "incrementJobView": { "id": "j1", "viewCount": 8 } }));
        let state = TestAppStateBuilder::default().with_gateway(gateway).build();
        let app =
            test::init_service(App::new().app_data(state).service(increment_job_view_handler))
                .await;

        let req = test::TestRequest::post().uri("/api/v1/jobs/j1/view").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["incrementJobView"]["viewCount"], 8);
        assert!(body.get("success").is_none());
    }
}

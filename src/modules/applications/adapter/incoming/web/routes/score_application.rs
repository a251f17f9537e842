use actix_web::{post, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/applications/{id}/score",
    tag = "Applications",
    params(("id" = String, Path, description = "Application ID")),
    responses(
        (status = 200, description = "AI score for the application", body = crate::modules::applications::application::domain::entities::AiScore),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/applications/{id}/score")]
pub async fn score_application_handler(
    _token: BearerToken,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.applications.score(&path.into_inner()).await {
        Ok(score) => ApiResponse::success(score),
        Err(e) => relay_failure(e, "Failed to score application"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::gateway::application::ports::outgoing::GatewayError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockGateway;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn upstream_failure_is_500_with_operation_message() {
        let state = TestAppStateBuilder::default()
            .with_gateway(MockGateway::failing(GatewayError::UpstreamStatus {
                status: 503,
                body: "scoring offline".into(),
            }))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(score_application_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/applications/a1/score")
            .insert_header(("Authorization", "Bearer t"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Failed to score application");
        assert!(!body.to_string().contains("scoring offline"));
    }
}

use actix_web::{post, web, Responder};
use serde_json::Value;

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/jobs",
    tag = "Jobs",
    request_body(content = Object, description = "JobInput; title, department, location, employmentType, experienceLevel, description, requirements and skills are required"),
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Missing field or invalid body", body = crate::shared::api::ErrorBody),
        (status = 401, description = "Missing or malformed bearer token", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/jobs")]
pub async fn create_job_handler(
    _token: BearerToken,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.jobs.create_job(body.into_inner()).await {
        Ok(job) => ApiResponse::created(job),
        Err(e) => relay_failure(e, "Failed to create job"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::custom_json_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockGateway;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn job_body() -> Value {
        json!({
            "title": "Engineer",
            "department": "Engineering",
            "location": "Berlin",
            "employmentType": "FULL_TIME",
            "experienceLevel": "MID",
            "description": "Build things",
            "requirements": ["Rust"],
            "skills": ["Rust"]
        })
    }

    #[actix_web::test]
    async fn creates_job_with_201() {
        let gateway = MockGateway::returning(json!({ "createJob": { "id": "j9", "status": "DRAFT" } }));
        let state = TestAppStateBuilder::default().with_gateway(gateway.clone()).build();
        let app = test::init_service(App::new().app_data(state).service(create_job_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/jobs")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(job_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["createJob"]["id"], "j9");
        assert_eq!(gateway.calls()[0].variables["input"], job_body());
    }

    #[actix_web::test]
    async fn missing_field_is_named_and_upstream_untouched() {
        let gateway = MockGateway::returning(json!({}));
        let state = TestAppStateBuilder::default().with_gateway(gateway.clone()).build();
        let app = test::init_service(App::new().app_data(state).service(create_job_handler)).await;

        let mut body = job_body();
        body.as_object_mut().unwrap().remove("location");

        let req = test::TestRequest::post()
            .uri("/api/v1/jobs")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Missing required field: location");
        assert_eq!(gateway.call_count(), 0);
    }

    #[actix_web::test]
    async fn malformed_json_uses_error_shape() {
        let gateway = MockGateway::returning(json!({}));
        let state = TestAppStateBuilder::default().with_gateway(gateway.clone()).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(custom_json_config())
                .service(create_job_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/jobs")
            .insert_header(("Authorization", "Bearer t"))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid request body");
        assert_eq!(gateway.call_count(), 0);
    }

    #[actix_web::test]
    async fn requires_bearer_token() {
        let gateway = MockGateway::returning(json!({}));
        let state = TestAppStateBuilder::default().with_gateway(gateway.clone()).build();
        let app = test::init_service(App::new().app_data(state).service(create_job_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/jobs")
            .set_json(job_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(gateway.call_count(), 0);
    }
}

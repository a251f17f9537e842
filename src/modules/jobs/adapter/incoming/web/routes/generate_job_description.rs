use actix_web::{post, web, Responder};
use serde_json::Value;

use crate::modules::auth::adapter::incoming::web::extractors::BearerToken;
use crate::modules::gateway::adapter::incoming::web::relay_response::relay_failure;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/jobs/generate-description",
    tag = "Jobs",
    request_body(content = Object, description = "title, department, experienceLevel and keySkills are required"),
    responses(
        (status = 200, description = "Generated description, requirements and responsibilities"),
        (status = 400, description = "Missing field", body = crate::shared::api::ErrorBody),
        (status = 500, description = "Upstream failure", body = crate::shared::api::ErrorBody)
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/v1/jobs/generate-description")]
pub async fn generate_job_description_handler(
    _token: BearerToken,
    body: web::Json<Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.jobs.generate_description(body.into_inner()).await {
        Ok(generated) => ApiResponse::success(generated),
        Err(e) => relay_failure(e, "Failed to generate job description"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::MockGateway;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn key_skills_are_required() {
        let gateway = MockGateway::returning(json!({}));
        let state = TestAppStateBuilder::default().with_gateway(gateway.clone()).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(generate_job_description_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/jobs/generate-description")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(json!({ "title": "x", "department": "y", "experienceLevel": "MID" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Missing required field: keySkills");
        assert_eq!(gateway.call_count(), 0);
    }

    #[actix_web::test]
    async fn relays_generated_text() {
        let gateway = MockGateway::returning(json!({
            "generateJobDescription": { "description": "We are hiring" }
        }));
        let state = TestAppStateBuilder::default().with_gateway(gateway).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(generate_job_description_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/jobs/generate-description")
            .insert_header(("Authorization", "Bearer t"))
            .set_json(json!({
                "title": "x",
                "department": "y",
                "experienceLevel": "MID",
                "keySkills": ["Rust"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["generateJobDescription"]["description"], "We are hiring");
    }
}

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    Error,
};
use tracing::warn;

use super::extractors::extract_token;
use crate::shared::api::ApiResponse;

/// Runs on every route. An absent `Authorization` header passes through
/// (public routes), but one that is present and not `Bearer <token>` is
/// rejected before any handler or upstream call.
pub async fn reject_malformed_authorization(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody>>, Error> {
    let malformed = req
        .headers()
        .get(header::AUTHORIZATION)
        .is_some_and(|value| value.to_str().ok().and_then(extract_token).is_none());

    if malformed {
        warn!(path = %req.path(), "Rejected malformed Authorization header");
        let response = ApiResponse::unauthorized("Invalid authorization header");
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req)
        .await
        .map(ServiceResponse::map_into_left_body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, middleware::from_fn, test, web, App, HttpResponse};
    use serde_json::Value;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .wrap(from_fn(reject_malformed_authorization))
                    .route("/open", web::get().to(|| async { HttpResponse::Ok().body("open") })),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn absent_header_passes() {
        let app = app!();

        let req = test::TestRequest::get().uri("/open").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn well_formed_header_passes() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/open")
            .insert_header(("Authorization", "Bearer abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn malformed_header_is_rejected_on_open_routes() {
        let app = app!();

        for value in ["Token abc def", "Basic abc", "Bearer a b"] {
            let req = test::TestRequest::get()
                .uri("/open")
                .insert_header(("Authorization", value))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{value}");
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["message"], "Invalid authorization header");
            assert_eq!(body["status"], 401);
        }
    }
}

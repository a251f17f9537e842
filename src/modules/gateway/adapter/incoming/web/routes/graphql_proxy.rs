use actix_web::{
    http::{header, StatusCode},
    post, web, HttpRequest, HttpResponse, Responder,
};
use tracing::error;

use crate::modules::gateway::application::ports::outgoing::{GraphQLRequest, ProxyRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Headers the server recomputes itself.
const SKIPPED_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
    "content-type",
];

fn is_forwardable(name: &str) -> bool {
    !SKIPPED_HEADERS
        .iter()
        .any(|skipped| skipped.eq_ignore_ascii_case(name))
}

/// Raw passthrough to Hub-HRMS. The body only has to look like a GraphQL
/// request; it is forwarded byte for byte.
#[utoipa::path(
    post,
    path = "/graphql",
    tag = "GraphQL",
    request_body(content = Object, description = "`{query, variables?, operationName?}`"),
    responses(
        (status = 200, description = "Upstream status and body mirrored verbatim"),
        (status = 400, description = "Not a GraphQL request", body = crate::shared::api::ErrorBody),
        (status = 502, description = "Hub-HRMS could not be reached", body = crate::shared::api::ErrorBody)
    )
)]
#[post("/graphql")]
pub async fn graphql_proxy_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if serde_json::from_slice::<GraphQLRequest>(&body).is_err() {
        return ApiResponse::bad_request("Invalid GraphQL request");
    }

    let user_token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let upstream = match data
        .gateway
        .forward(ProxyRequest {
            body: body.to_vec(),
            user_token,
        })
        .await
    {
        Ok(upstream) => upstream,
        Err(e) => {
            error!(error = %e, "GraphQL proxy request failed");
            return ApiResponse::bad_gateway("Failed to execute request");
        }
    };

    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = HttpResponse::build(status);
    for (name, value) in upstream.headers.iter().filter(|(n, _)| is_forwardable(n)) {
        response.append_header((name.as_str(), value.as_str()));
    }

    response
        .content_type("application/json")
        .body(upstream.body)
}

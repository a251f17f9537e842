use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;

/// Caller's bearer token. Presence and format are checked here; validity is
/// left to Hub-HRMS, which receives the token on proxied calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for BearerToken {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(header) = req.headers().get("Authorization") else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "Unauthorized",
            ))));
        };

        match header.to_str().ok().and_then(extract_token) {
            Some(token) => ready(Ok(BearerToken(token))),
            None => ready(Err(create_api_error(ApiResponse::unauthorized(
                "Invalid authorization header",
            )))),
        }
    }
}

/// Accepts exactly `Bearer <token>` with a single space and no extra parts.
pub(crate) fn extract_token(header: &str) -> Option<String> {
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() || token.contains(' ') {
        return None;
    }
    Some(token.to_string())
}

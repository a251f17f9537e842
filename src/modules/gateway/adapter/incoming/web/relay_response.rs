use actix_web::HttpResponse;
use tracing::error;

use crate::modules::gateway::application::relay::RelayError;
use crate::shared::api::ApiResponse;

/// Maps a relay failure to its HTTP response. `failure` is the operation
/// specific message shown for upstream errors; upstream details stay in logs.
pub fn relay_failure(err: RelayError, failure: &str) -> HttpResponse {
    match err {
        RelayError::Input(e) => ApiResponse::bad_request(&e.to_string()),
        RelayError::Validation(message) => ApiResponse::bad_request(message),
        RelayError::NotFound(_) => ApiResponse::not_found(&err.to_string()),
        RelayError::Upstream(e) => {
            error!(error = %e, "{}", failure);
            ApiResponse::internal_error(failure)
        }
    }
}

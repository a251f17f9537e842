mod form_config;
pub mod routes;
mod upload_response;

pub use form_config::upload_form_config;
pub use upload_response::upload_failure;

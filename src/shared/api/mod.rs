mod json_config;
mod request_timeout;
mod response;

pub use json_config::custom_json_config;
pub use request_timeout::{enforce_request_timeout, RequestTimeout};
pub use response::{ApiResponse, ErrorBody, StatusMessage};

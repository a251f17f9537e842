pub mod extractors;
mod middleware;

pub use middleware::reject_malformed_authorization;

pub mod relay_response;
pub mod routes;

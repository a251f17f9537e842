pub mod api;
pub mod input;
pub mod query;

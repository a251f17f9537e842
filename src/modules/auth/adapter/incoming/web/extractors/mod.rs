mod auth;

pub use auth::BearerToken;
pub(crate) use auth::extract_token;

mod graphql_proxy;

pub use graphql_proxy::*;

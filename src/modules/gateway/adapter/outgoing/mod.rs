mod hrms_graphql_client;

pub use hrms_graphql_client::{HrmsGraphqlClient, DEFAULT_TIMEOUT};

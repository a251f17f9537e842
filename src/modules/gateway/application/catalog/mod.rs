//! Fixed GraphQL documents sent to the HRMS. Pure data: no field selection is
//! ever built at runtime.

pub mod analytics;
pub mod applications;
pub mod candidates;
pub mod jobs;

/// Cheapest possible round trip, used by health and readiness probes.
pub const HEALTH_PROBE: &str = "query { __typename }";

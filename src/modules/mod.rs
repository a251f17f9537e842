pub mod analytics;
pub mod applications;
pub mod auth;
pub mod candidates;
pub mod email;
pub mod gateway;
pub mod jobs;
pub mod uploads;

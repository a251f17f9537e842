mod application_service;

pub use application_service::{ApplicationService, SUBMIT_APPLICATION_REQUIRED};

mod job_service;

pub use job_service::{JobService, CREATE_JOB_REQUIRED, GENERATE_DESCRIPTION_REQUIRED};

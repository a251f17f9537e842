mod job_use_cases;

pub use job_use_cases::JobUseCases;

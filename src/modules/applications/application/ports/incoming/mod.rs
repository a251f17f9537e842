mod application_use_cases;

pub use application_use_cases::ApplicationUseCases;

mod candidate_use_cases;

pub use candidate_use_cases::CandidateUseCases;

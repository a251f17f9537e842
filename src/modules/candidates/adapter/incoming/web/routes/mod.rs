mod candidate_profile;

pub use candidate_profile::*;

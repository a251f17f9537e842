pub const GET_CANDIDATE: &str = r#"
query GetCandidate($id: ID!) {
  candidate(id: $id) {
    id
    firstName
    lastName
    email
    phone
    location
    headline
    summary
    resumeUrl
    linkedinUrl
    portfolioUrl
    githubUrl
    skills
    experience { company title startDate endDate current description achievements }
    education { institution degree field startDate endDate gpa }
    certifications { name issuer issueDate expiryDate credentialId }
    languages { language proficiency }
    applications {
      id
      job { id title }
      status
      appliedDate
    }
    availability
    expectedSalary
    preferredLocations
    remotePreference
    createdAt
    updatedAt
  }
}
"#;

pub const UPDATE_CANDIDATE_PROFILE: &str = r#"
mutation UpdateCandidateProfile($id: ID!, $input: CandidateProfileInput!) {
  updateCandidateProfile(id: $id, input: $input) {
    id
    firstName
    lastName
    updatedAt
  }
}
"#;

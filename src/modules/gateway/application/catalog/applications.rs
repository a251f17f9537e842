pub const SUBMIT_APPLICATION: &str = r#"
mutation SubmitApplication($input: ApplicationInput!) {
  submitApplication(input: $input) {
    id
    status
    appliedDate
    aiScore { overall insights strengths concerns recommendation generatedAt }
  }
}
"#;

pub const GET_APPLICATIONS: &str = r#"
query GetApplications($filters: ApplicationFilters, $limit: Int, $offset: Int) {
  applications(filters: $filters, limit: $limit, offset: $offset) {
    id
    job { id title department }
    candidate { id firstName lastName email phone location }
    status
    appliedDate
    lastUpdated
    resumeUrl
    coverLetter
    aiScore { overall recommendation }
  }
}
"#;

pub const GET_APPLICATION: &str = r#"
query GetApplication($id: ID!) {
  application(id: $id) {
    id
    job { id title department location description requirements }
    candidate {
      id
      firstName
      lastName
      email
      phone
      location
      resumeUrl
      linkedinUrl
      portfolioUrl
    }
    status
    appliedDate
    lastUpdated
    resumeUrl
    coverLetter
    linkedinUrl
    portfolioUrl
    yearsOfExperience
    currentLocation
    willingToRelocate
    expectedSalary
    availability
    aiScore { overall insights strengths concerns recommendation generatedAt }
    notes {
      id
      author { id name }
      content
      createdAt
      isInternal
    }
    timeline {
      id
      type
      description
      performedBy { id name }
      timestamp
    }
  }
}
"#;

pub const UPDATE_APPLICATION_STATUS: &str = r#"
mutation UpdateApplicationStatus($id: ID!, $status: ApplicationStatus!, $note: String) {
  updateApplicationStatus(id: $id, status: $status, note: $note) {
    id
    status
    lastUpdated
  }
}
"#;

pub const BULK_UPDATE_APPLICATION_STATUS: &str = r#"
mutation BulkUpdateApplicationStatus($ids: [ID!]!, $status: ApplicationStatus!) {
  bulkUpdateApplicationStatus(ids: $ids, status: $status) {
    id
    status
  }
}
"#;

pub const ADD_APPLICATION_NOTE: &str = r#"
mutation AddApplicationNote($applicationId: ID!, $content: String!, $isInternal: Boolean) {
  addApplicationNote(applicationId: $applicationId, content: $content, isInternal: $isInternal) {
    id
    content
    author { id name }
    createdAt
  }
}
"#;

pub const SCORE_APPLICATION: &str = r#"
mutation ScoreApplication($applicationId: ID!) {
  scoreApplication(applicationId: $applicationId) {
    overall
    insights
    strengths
    concerns
    recommendation
    generatedAt
  }
}
"#;

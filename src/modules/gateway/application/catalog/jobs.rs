//! Job documents. Each one backs exactly one REST operation.

pub const GET_JOBS: &str = r#"
query GetJobs($filters: JobFilters, $limit: Int, $offset: Int) {
  jobs(filters: $filters, limit: $limit, offset: $offset) {
    id
    title
    department
    location
    employmentType
    experienceLevel
    salaryRange { min max currency }
    description
    requirements
    responsibilities
    benefits
    skills
    status
    postedDate
    closingDate
    applicationCount
    viewCount
    remoteWork
    urgentHiring
    createdBy { id name }
    createdAt
    updatedAt
  }
}
"#;

pub const GET_JOB: &str = r#"
query GetJob($id: ID!) {
  job(id: $id) {
    id
    title
    department
    location
    employmentType
    experienceLevel
    salaryRange { min max currency }
    description
    requirements
    responsibilities
    benefits
    skills
    status
    postedDate
    closingDate
    applicationCount
    viewCount
    remoteWork
    urgentHiring
    createdBy { id name email }
    createdAt
    updatedAt
  }
}
"#;

pub const CREATE_JOB: &str = r#"
mutation CreateJob($input: JobInput!) {
  createJob(input: $input) {
    id
    title
    status
    postedDate
  }
}
"#;

pub const UPDATE_JOB: &str = r#"
mutation UpdateJob($id: ID!, $input: JobInput!) {
  updateJob(id: $id, input: $input) {
    id
    title
    status
    updatedAt
  }
}
"#;

pub const PUBLISH_JOB: &str = r#"
mutation PublishJob($id: ID!) {
  publishJob(id: $id) {
    id
    status
    postedDate
  }
}
"#;

pub const CLOSE_JOB: &str = r#"
mutation CloseJob($id: ID!) {
  closeJob(id: $id) {
    id
    status
    closingDate
  }
}
"#;

pub const DELETE_JOB: &str = r#"
mutation DeleteJob($id: ID!) {
  deleteJob(id: $id)
}
"#;

pub const INCREMENT_JOB_VIEW: &str = r#"
mutation IncrementJobView($id: ID!) {
  incrementJobView(id: $id) {
    id
    viewCount
  }
}
"#;

pub const GENERATE_JOB_DESCRIPTION: &str = r#"
mutation GenerateJobDescription($input: JobDescriptionInput!) {
  generateJobDescription(input: $input) {
    description
    requirements
    responsibilities
    suggestedSkills
  }
}
"#;

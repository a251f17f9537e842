pub const GET_RECRUITMENT_METRICS: &str = r#"
query GetRecruitmentMetrics($dateRange: DateRangeInput!) {
  recruitmentMetrics(dateRange: $dateRange) {
    totalJobs
    activeJobs
    totalApplications
    avgApplicationsPerJob
    avgTimeToHire
    conversionRates {
      viewToApply
      applyToScreen
      screenToInterview
      interviewToOffer
      offerToAccept
    }
    topPerformingJobs {
      job { id title }
      views
      applications
      conversionRate
      avgTimeToFill
    }
    applicationsByStatus { status count percentage }
    applicationTrend { date value }
    sourceBreakdown { source count percentage }
  }
}
"#;

pub const GET_JOB_PERFORMANCE: &str = r#"
query GetJobPerformance($jobId: ID!) {
  jobPerformance(jobId: $jobId) {
    job { id title }
    views
    applications
    conversionRate
    avgTimeToFill
  }
}
"#;

pub const GET_APPLICATION_PIPELINE: &str = r#"
query GetApplicationPipeline($jobId: ID) {
  applicationPipeline(jobId: $jobId) {
    status
    count
    applications {
      id
      candidate { firstName lastName }
      appliedDate
      aiScore { overall }
    }
  }
}
"#;

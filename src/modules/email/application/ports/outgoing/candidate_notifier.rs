use crate::modules::email::application::ports::outgoing::EmailSendError;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(#[from] EmailSendError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationConfirmation {
    pub email: String,
    pub first_name: String,
    pub job_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewInvitation {
    pub email: String,
    pub candidate_name: String,
    pub job_title: String,
    pub interview_date: String,
}

/// Offer and rejection share the same recipient details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDecision {
    pub email: String,
    pub candidate_name: String,
    pub job_title: String,
}

#[async_trait::async_trait]
pub trait CandidateNotifier: Send + Sync {
    async fn send_application_confirmation(
        &self,
        confirmation: &ApplicationConfirmation,
    ) -> Result<(), NotificationError>;

    async fn send_status_update(
        &self,
        application_id: &str,
        status: &str,
    ) -> Result<(), NotificationError>;

    async fn send_interview_invitation(
        &self,
        invitation: &InterviewInvitation,
    ) -> Result<(), NotificationError>;

    async fn send_offer_letter(&self, decision: &CandidateDecision)
        -> Result<(), NotificationError>;

    async fn send_rejection(&self, decision: &CandidateDecision) -> Result<(), NotificationError>;
}

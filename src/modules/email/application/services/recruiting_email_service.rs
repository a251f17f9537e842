use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::info;

use crate::modules::email::application::ports::outgoing::{
    ApplicationConfirmation, CandidateDecision, CandidateNotifier, EmailSender,
    InterviewInvitation, NotificationError,
};
use crate::modules::email::application::services::templates;

/// Candidate-facing emails. Without a configured sender every send is a
/// logged no-op so the service runs with email disabled.
#[derive(Clone)]
pub struct RecruitingEmailService {
    sender: Option<Arc<dyn EmailSender + Send + Sync>>,
}

impl fmt::Debug for RecruitingEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecruitingEmailService")
            .field(
                "sender",
                &self.sender.as_ref().map(|_| "<dyn EmailSender>"),
            )
            .finish()
    }
}

impl RecruitingEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    pub fn disabled() -> Self {
        Self { sender: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }

    async fn deliver(&self, to: &str, (subject, html): (String, String)) -> Result<(), NotificationError> {
        let Some(sender) = &self.sender else {
            info!(to, subject = %subject, "Email provider not configured, skipping email");
            return Ok(());
        };

        sender.send_email(to, &subject, &html).await?;
        info!(to, subject = %subject, "Email sent");
        Ok(())
    }
}

#[async_trait]
impl CandidateNotifier for RecruitingEmailService {
    async fn send_application_confirmation(
        &self,
        confirmation: &ApplicationConfirmation,
    ) -> Result<(), NotificationError> {
        self.deliver(
            &confirmation.email,
            templates::application_confirmation(confirmation),
        )
        .await
    }

    async fn send_status_update(
        &self,
        application_id: &str,
        status: &str,
    ) -> Result<(), NotificationError> {
        // Recipient lookup needs an upstream query that does not exist yet.
        info!(application_id, status, "Status update notification recorded, no email sent");
        Ok(())
    }

    async fn send_interview_invitation(
        &self,
        invitation: &InterviewInvitation,
    ) -> Result<(), NotificationError> {
        self.deliver(&invitation.email, templates::interview_invitation(invitation))
            .await
    }

    async fn send_offer_letter(
        &self,
        decision: &CandidateDecision,
    ) -> Result<(), NotificationError> {
        self.deliver(&decision.email, templates::offer_letter(decision))
            .await
    }

    async fn send_rejection(&self, decision: &CandidateDecision) -> Result<(), NotificationError> {
        self.deliver(&decision.email, templates::rejection(decision))
            .await
    }
}

mod candidate_notifier;
mod email_sender;

pub use candidate_notifier::{
    ApplicationConfirmation, CandidateDecision, CandidateNotifier, InterviewInvitation,
    NotificationError,
};
pub use email_sender::{EmailSendError, EmailSender};

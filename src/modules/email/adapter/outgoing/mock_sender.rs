use crate::modules::email::application::ports::outgoing::{EmailSendError, EmailSender};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records every email instead of sending it. Can be told to fail.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<SentEmail>>>,
    failure: Option<EmailSendError>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: EmailSendError) -> Self {
        Self {
            sent_emails: Arc::new(Mutex::new(Vec::new())),
            failure: Some(err),
        }
    }

    pub fn get_sent_emails(&self) -> Vec<SentEmail> {
        self.sent_emails.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError> {
        self.sent_emails.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

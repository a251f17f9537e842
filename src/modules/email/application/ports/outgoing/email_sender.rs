use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EmailSendError {
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("failed to send email: {0}")]
    Transport(String),

    #[error("email provider returned status {0}")]
    Rejected(u16),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, html_body: &str)
        -> Result<(), EmailSendError>;
}

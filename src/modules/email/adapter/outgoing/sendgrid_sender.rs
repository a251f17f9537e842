use async_trait::async_trait;
use email_address::EmailAddress;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::modules::email::application::ports::outgoing::{EmailSendError, EmailSender};

pub const SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailSend<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

pub struct SendGridEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_email: String,
    from_name: String,
}

impl SendGridEmailSender {
    pub fn new(
        api_key: &str,
        from_email: &str,
        from_name: &str,
    ) -> Result<Self, EmailSendError> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| EmailSendError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            api_url: SENDGRID_API_URL.to_string(),
            api_key: api_key.to_string(),
            from_email: from_email.to_string(),
            from_name: from_name.to_string(),
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    fn payload<'a>(&'a self, to: &'a str, subject: &'a str, html_body: &'a str) -> MailSend<'a> {
        MailSend {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: to,
                    name: None,
                }],
            }],
            from: Address {
                email: &self.from_email,
                name: Some(&self.from_name),
            },
            subject,
            content: vec![Content {
                kind: "text/html",
                value: html_body,
            }],
        }
    }
}

#[async_trait]
impl EmailSender for SendGridEmailSender {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), EmailSendError> {
        if !EmailAddress::is_valid(to) {
            return Err(EmailSendError::InvalidRecipient(to.to_string()));
        }

        let body = serde_json::to_vec(&self.payload(to, subject, html_body))
            .map_err(|e| EmailSendError::Transport(e.to_string()))?;

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| EmailSendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailSendError::Rejected(status.as_u16()));
        }

        debug!(to, status = status.as_u16(), "Email accepted by provider");
        Ok(())
    }
}

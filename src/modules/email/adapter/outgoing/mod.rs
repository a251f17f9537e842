#[cfg(test)]
pub mod mock_sender;
mod sendgrid_sender;

pub use sendgrid_sender::{SendGridEmailSender, SENDGRID_API_URL};

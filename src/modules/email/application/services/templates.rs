//! Fixed HTML bodies for candidate emails. Each function returns
//! `(subject, html)`.

use crate::modules::email::application::ports::outgoing::{
    ApplicationConfirmation, CandidateDecision, InterviewInvitation,
};

const OPEN: &str =
    r#"<html><body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">"#;
const SIGNATURE: &str = "<p>Best regards,<br>The Recruiting Team</p></body></html>";

pub fn application_confirmation(c: &ApplicationConfirmation) -> (String, String) {
    let html = format!(
        "{OPEN}\
         <h2>Thank you for your application, {name}!</h2>\
         <p>We've successfully received your application for the position.</p>\
         <p>Our recruiting team will review your application and get back to you soon.</p>\
         <p>In the meantime, you can:</p>\
         <ul>\
         <li>Track your application status in your dashboard</li>\
         <li>Explore other open positions</li>\
         <li>Connect with us on LinkedIn</li>\
         </ul>\
         {SIGNATURE}",
        name = c.first_name,
    );

    ("Application Received - Thank You for Applying!".to_string(), html)
}

pub fn interview_invitation(i: &InterviewInvitation) -> (String, String) {
    let html = format!(
        "{OPEN}\
         <h2>Great news, {name}!</h2>\
         <p>We'd like to invite you for an interview for the <strong>{job}</strong> position.</p>\
         <p><strong>Interview Date:</strong> {date}</p>\
         <p>Please confirm your availability by replying to this email.</p>\
         <p>We look forward to speaking with you!</p>\
         {SIGNATURE}",
        name = i.candidate_name,
        job = i.job_title,
        date = i.interview_date,
    );

    (format!("Interview Invitation - {}", i.job_title), html)
}

pub fn offer_letter(d: &CandidateDecision) -> (String, String) {
    let html = format!(
        "{OPEN}\
         <h2>Congratulations, {name}!</h2>\
         <p>We're excited to extend an offer for the <strong>{job}</strong> position.</p>\
         <p>Please review the attached offer letter and let us know if you have any questions.</p>\
         <p>We look forward to welcoming you to our team!</p>\
         {SIGNATURE}",
        name = d.candidate_name,
        job = d.job_title,
    );

    (format!("Job Offer - {}", d.job_title), html)
}

pub fn rejection(d: &CandidateDecision) -> (String, String) {
    let html = format!(
        "{OPEN}\
         <p>Dear {name},</p>\
         <p>Thank you for your interest in the <strong>{job}</strong> position and for taking the time to apply.</p>\
         <p>After careful consideration, we have decided to move forward with other candidates \
         whose qualifications more closely match our current needs.</p>\
         <p>We appreciate your interest in our company and encourage you to apply for future \
         positions that match your skills and experience.</p>\
         <p>We wish you the best in your job search.</p>\
         {SIGNATURE}",
        name = d.candidate_name,
        job = d.job_title,
    );

    (format!("Application Update - {}", d.job_title), html)
}

mod notification_dispatcher;
mod recruiting_email_service;
mod templates;

pub use notification_dispatcher::{
    Notification, NotificationDispatcher, NotificationWorker, DEFAULT_QUEUE_CAPACITY,
};
pub use recruiting_email_service::RecruitingEmailService;

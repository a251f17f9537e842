use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::modules::email::application::ports::outgoing::{
    ApplicationConfirmation, CandidateDecision, CandidateNotifier, InterviewInvitation,
    NotificationError,
};

pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    ApplicationConfirmation(ApplicationConfirmation),
    StatusUpdate {
        application_id: String,
        status: String,
    },
    InterviewInvitation(InterviewInvitation),
    OfferLetter(CandidateDecision),
    Rejection(CandidateDecision),
}

impl Notification {
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::ApplicationConfirmation(_) => "application_confirmation",
            Notification::StatusUpdate { .. } => "status_update",
            Notification::InterviewInvitation(_) => "interview_invitation",
            Notification::OfferLetter(_) => "offer_letter",
            Notification::Rejection(_) => "rejection",
        }
    }
}

/// Queues candidate notifications for a single background worker.
///
/// `dispatch` never blocks and never fails the caller: a full or closed queue
/// is logged and the notification is dropped. Nothing is retried.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::Sender<Notification>,
}

impl fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("capacity", &self.sender.max_capacity())
            .finish()
    }
}

/// Handle on the background task. Keep it alive for the process lifetime and
/// call `shutdown` once the HTTP server has stopped.
pub struct NotificationWorker {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl NotificationDispatcher {
    /// Spawns the worker on the current tokio runtime.
    pub fn start(
        notifier: Arc<dyn CandidateNotifier + Send + Sync>,
        capacity: usize,
    ) -> (Self, NotificationWorker) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let (stop_tx, stop_rx) = oneshot::channel();

        let handle = tokio::spawn(run_worker(notifier, receiver, stop_rx));

        (
            Self { sender },
            NotificationWorker {
                stop: stop_tx,
                handle,
            },
        )
    }

    pub fn dispatch(&self, notification: Notification) {
        match self.sender.try_send(notification) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(n)) => {
                warn!(kind = n.kind(), "Notification queue full, dropping notification");
            }
            Err(mpsc::error::TrySendError::Closed(n)) => {
                warn!(kind = n.kind(), "Notification worker stopped, dropping notification");
            }
        }
    }
}

impl NotificationWorker {
    /// Stops accepting new notifications and gives queued ones `grace` to
    /// finish. Whatever is left after that is dropped.
    pub async fn shutdown(self, grace: Duration) {
        let _ = self.stop.send(());

        match tokio::time::timeout(grace, self.handle).await {
            Ok(Ok(())) => info!("Notification worker drained"),
            Ok(Err(e)) => error!(error = %e, "Notification worker failed"),
            Err(_) => warn!(
                grace_secs = grace.as_secs(),
                "Notification worker did not drain in time, pending notifications dropped"
            ),
        }
    }
}

async fn run_worker(
    notifier: Arc<dyn CandidateNotifier + Send + Sync>,
    mut receiver: mpsc::Receiver<Notification>,
    mut stop: oneshot::Receiver<()>,
) {
    // A dropped worker handle only disarms the stop signal.
    let mut stop_armed = true;

    loop {
        tokio::select! {
            received = receiver.recv() => match received {
                Some(notification) => deliver(notifier.as_ref(), notification).await,
                None => return,
            },
            signal = &mut stop, if stop_armed => {
                if signal.is_ok() {
                    break;
                }
                stop_armed = false;
            }
        }
    }

    receiver.close();
    while let Some(notification) = receiver.recv().await {
        deliver(notifier.as_ref(), notification).await;
    }
}

async fn deliver(notifier: &(dyn CandidateNotifier + Send + Sync), notification: Notification) {
    let kind = notification.kind();

    let result: Result<(), NotificationError> = match &notification {
        Notification::ApplicationConfirmation(c) => notifier.send_application_confirmation(c).await,
        Notification::StatusUpdate {
            application_id,
            status,
        } => notifier.send_status_update(application_id, status).await,
        Notification::InterviewInvitation(i) => notifier.send_interview_invitation(i).await,
        Notification::OfferLetter(d) => notifier.send_offer_letter(d).await,
        Notification::Rejection(d) => notifier.send_rejection(d).await,
    };

    if let Err(e) = result {
        error!(kind, error = %e, "Failed to send notification");
    }
}

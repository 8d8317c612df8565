use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use appointment_cell::{AppointmentDirectory, AppointmentError, ChatMessage, SenderRole};

use crate::models::{ChatSessionConfig, ChatSessionError};

/// Polling session that keeps a local, renderable copy of one appointment's
/// chat thread approximately in sync with the canonical store.
///
/// The local copy is always a wholesale fetch result, never a splice of two
/// fetches. Within a session exactly one timer runs, and ending the session
/// (explicitly or by drop) cancels it.
pub struct ChatSession {
    appointment_id: Uuid,
    role: SenderRole,
    directory: Arc<dyn AppointmentDirectory>,
    history_tx: Arc<watch::Sender<Vec<ChatMessage>>>,
    history_rx: watch::Receiver<Vec<ChatMessage>>,
    ended: Arc<AtomicBool>,
    poll_task: JoinHandle<()>,
}

impl ChatSession {
    /// Opens a session for one appointment: one immediate fetch, then a
    /// recurring fetch on `config.poll_interval`.
    pub async fn start(
        directory: Arc<dyn AppointmentDirectory>,
        appointment_id: Uuid,
        role: SenderRole,
        config: ChatSessionConfig,
    ) -> Self {
        let (history_tx, history_rx) = watch::channel(Vec::new());
        let history_tx = Arc::new(history_tx);
        let ended = Arc::new(AtomicBool::new(false));

        debug!("Opening chat session for appointment {} as {}", appointment_id, role);

        fetch_and_set(directory.as_ref(), &history_tx, &ended, appointment_id).await;

        let poll_task = {
            let directory = directory.clone();
            let history_tx = history_tx.clone();
            let ended = ended.clone();

            tokio::spawn(async move {
                let mut ticker = interval(config.poll_interval);
                ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first tick completes immediately; start() already did
                // the initial fetch.
                ticker.tick().await;

                loop {
                    ticker.tick().await;
                    if ended.load(Ordering::SeqCst) {
                        break;
                    }
                    fetch_and_set(directory.as_ref(), &history_tx, &ended, appointment_id).await;
                }
            })
        };

        Self {
            appointment_id,
            role,
            directory,
            history_tx,
            history_rx,
            ended,
            poll_task,
        }
    }

    pub fn appointment_id(&self) -> Uuid {
        self.appointment_id
    }

    pub fn role(&self) -> SenderRole {
        self.role
    }

    /// Current local copy of the thread.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.history_rx.borrow().clone()
    }

    /// Change notifications for display layers; each fetch that found the
    /// appointment publishes a full snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<ChatMessage>> {
        self.history_tx.subscribe()
    }

    /// Appends one message to the appointment's thread, then re-fetches once
    /// so the sender sees their own message before the next timer tick.
    ///
    /// Trimmed-empty text is a no-op: no store call, no local change.
    pub async fn send(&self, text: &str) -> Result<(), ChatSessionError> {
        let body = text.trim();
        if body.is_empty() {
            return Ok(());
        }

        self.directory
            .append_message(self.appointment_id, self.role, body)
            .await
            .map_err(|e| {
                warn!("Chat send failed for appointment {}: {}", self.appointment_id, e);
                match e {
                    AppointmentError::NotFound => ChatSessionError::AppointmentNotFound,
                    AppointmentError::ValidationError(msg) => ChatSessionError::SendFailed(msg),
                }
            })?;

        fetch_and_set(
            self.directory.as_ref(),
            &self.history_tx,
            &self.ended,
            self.appointment_id,
        )
        .await;

        Ok(())
    }

    /// Tears the session down. No fetch runs after this returns, and a fetch
    /// already in flight is discarded instead of applied.
    pub fn end(&self) {
        if self.ended.swap(true, Ordering::SeqCst) {
            return;
        }
        self.poll_task.abort();
        info!("Chat session for appointment {} ended", self.appointment_id);
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.end();
    }
}

/// Looks the appointment up in the full collection and replaces the local
/// copy wholesale with its thread. An unknown id leaves local state untouched
/// and does not stop the timer.
async fn fetch_and_set(
    directory: &dyn AppointmentDirectory,
    history_tx: &watch::Sender<Vec<ChatMessage>>,
    ended: &AtomicBool,
    appointment_id: Uuid,
) {
    let appointments = directory.list().await;

    // Stale-response discard: the directory call may resolve after the
    // session was torn down.
    if ended.load(Ordering::SeqCst) {
        return;
    }

    match appointments.into_iter().find(|a| a.id == appointment_id) {
        Some(appointment) => {
            let _ = history_tx.send(appointment.chat_history);
        }
        None => {
            debug!(
                "Appointment {} not in store this tick, keeping local history",
                appointment_id
            );
        }
    }
}

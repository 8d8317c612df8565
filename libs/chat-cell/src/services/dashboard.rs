use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use appointment_cell::{Appointment, AppointmentDirectory, AppointmentStore, SenderRole};

use crate::models::ChatSessionConfig;
use crate::services::session::ChatSession;

/// View state behind a patient's appointment dashboard: the patient's own
/// appointments plus at most one open chat session at a time.
pub struct DashboardSession {
    patient_phone: String,
    role: SenderRole,
    store: Arc<AppointmentStore>,
    config: ChatSessionConfig,
    active_chat: Option<ChatSession>,
}

impl DashboardSession {
    pub fn new(
        store: Arc<AppointmentStore>,
        patient_phone: &str,
        role: SenderRole,
        config: ChatSessionConfig,
    ) -> Self {
        Self {
            patient_phone: patient_phone.to_string(),
            role,
            store,
            config,
            active_chat: None,
        }
    }

    pub async fn appointments(&self) -> Vec<Appointment> {
        self.store.list_for_patient(&self.patient_phone).await
    }

    /// Opens the chat for an appointment, or closes it when it is already the
    /// open one. Switching appointments tears the previous session down
    /// before the new one starts.
    pub async fn toggle_chat(&mut self, appointment_id: Uuid) -> Option<&ChatSession> {
        if self.active_appointment_id() == Some(appointment_id) {
            self.close_chat();
            return None;
        }

        self.close_chat();

        debug!("Opening dashboard chat for appointment {}", appointment_id);
        let directory: Arc<dyn AppointmentDirectory> = self.store.clone();
        let session = ChatSession::start(directory, appointment_id, self.role, self.config).await;

        Some(self.active_chat.insert(session))
    }

    pub fn active_chat(&self) -> Option<&ChatSession> {
        self.active_chat.as_ref()
    }

    pub fn active_appointment_id(&self) -> Option<Uuid> {
        self.active_chat.as_ref().map(|c| c.appointment_id())
    }

    pub fn close_chat(&mut self) {
        if let Some(chat) = self.active_chat.take() {
            chat.end();
        }
    }
}

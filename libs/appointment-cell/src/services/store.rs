use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, BookAppointmentRequest, ChatMessage,
    SenderRole,
};

/// Read/append interface the chat cell polls against. The store hands out
/// snapshots only; the canonical sequences can be mutated solely through
/// `append_message`.
#[async_trait]
pub trait AppointmentDirectory: Send + Sync {
    async fn list(&self) -> Vec<Appointment>;

    async fn append_message(
        &self,
        appointment_id: Uuid,
        sender_role: SenderRole,
        text: &str,
    ) -> Result<ChatMessage, AppointmentError>;
}

/// In-memory appointment store. Single source of truth for appointment
/// records and their consultation threads.
pub struct AppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            appointments: RwLock::new(Vec::new()),
        }
    }

    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: RwLock::new(appointments),
        }
    }

    pub async fn book(&self, request: BookAppointmentRequest) -> Appointment {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: request.patient_name,
            patient_phone: request.patient_phone,
            doctor_name: request.doctor_name,
            appointment_date: request.appointment_date,
            appointment_time: request.appointment_time,
            patient_problem: request.patient_problem,
            doctor_notes: None,
            health_status: request.health_status,
            status: AppointmentStatus::Pending,
            chat_history: Vec::new(),
        };

        info!("Booked appointment {} for {}", appointment.id, appointment.patient_phone);

        let mut appointments = self.appointments.write().await;
        appointments.push(appointment.clone());
        appointment
    }

    pub async fn find(&self, appointment_id: Uuid) -> Option<Appointment> {
        let appointments = self.appointments.read().await;
        appointments.iter().find(|a| a.id == appointment_id).cloned()
    }

    pub async fn list_for_patient(&self, patient_phone: &str) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        appointments
            .iter()
            .filter(|a| a.patient_phone == patient_phone)
            .cloned()
            .collect()
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentDirectory for AppointmentStore {
    async fn list(&self) -> Vec<Appointment> {
        let appointments = self.appointments.read().await;
        appointments.clone()
    }

    async fn append_message(
        &self,
        appointment_id: Uuid,
        sender_role: SenderRole,
        text: &str,
    ) -> Result<ChatMessage, AppointmentError> {
        let body = text.trim();
        if body.is_empty() {
            return Err(AppointmentError::ValidationError(
                "Message text cannot be empty".to_string(),
            ));
        }

        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == appointment_id)
            .ok_or(AppointmentError::NotFound)?;

        let message = ChatMessage::new(sender_role, body);
        appointment.chat_history.push(message.clone());

        debug!(
            "Appended {} message to appointment {} ({} total)",
            sender_role,
            appointment_id,
            appointment.chat_history.len()
        );

        Ok(message)
    }
}

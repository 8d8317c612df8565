// Appointment Cell - appointment records and their consultation threads
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types for convenience
pub use models::{
    AppendMessageRequest, Appointment, AppointmentError, AppointmentStatus,
    BookAppointmentRequest, ChatMessage, HealthStatus, SenderRole,
};

// Re-export main router for integration
pub use router::appointment_routes;

// Public services API
pub use services::store::{AppointmentDirectory, AppointmentStore};

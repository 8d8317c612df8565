// Triage Cell - AI-backed symptom triage advisory
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export commonly used types for convenience
pub use models::{TriageError, TriageRequest, TriageResponse, Urgency};

// Re-export main router for integration
pub use router::triage_routes;

// Public services API
pub use services::advisor::TriageService;

// Chat Cell - per-appointment consultation chat kept in sync by polling
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use models::{ChatSessionConfig, ChatSessionError};
pub use services::dashboard::DashboardSession;
pub use services::session::ChatSession;

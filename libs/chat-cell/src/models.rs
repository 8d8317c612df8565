use std::time::Duration;

use shared_config::AppConfig;

/// Tuning for a chat session's polling timer.
#[derive(Debug, Clone, Copy)]
pub struct ChatSessionConfig {
    pub poll_interval: Duration,
}

impl Default for ChatSessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(shared_config::DEFAULT_CHAT_POLL_INTERVAL_MS),
        }
    }
}

impl ChatSessionConfig {
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.chat_poll_interval_ms),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatSessionError {
    #[error("Appointment not found")]
    AppointmentNotFound,

    #[error("Message not sent: {0}")]
    SendFailed(String),
}

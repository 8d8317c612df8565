use std::env;
use tracing::warn;

pub const DEFAULT_CHAT_POLL_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub chat_poll_interval_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("GEMINI_API_KEY not set, using empty value");
                    String::new()
                }),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("GEMINI_BASE_URL not set, using default");
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".to_string()),
            chat_poll_interval_ms: env::var("CHAT_POLL_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CHAT_POLL_INTERVAL_MS),
        };

        if !config.is_triage_configured() {
            warn!("AI triage not configured - missing GEMINI_API_KEY");
        }

        config
    }

    pub fn is_triage_configured(&self) -> bool {
        !self.gemini_api_key.is_empty() && !self.gemini_base_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_triage_is_detected() {
        let config = AppConfig {
            gemini_api_key: String::new(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model: "gemini-3-flash-preview".to_string(),
            chat_poll_interval_ms: DEFAULT_CHAT_POLL_INTERVAL_MS,
        };
        assert!(!config.is_triage_configured());
    }

    #[test]
    fn configured_triage_is_detected() {
        let config = AppConfig {
            gemini_api_key: "test-key".to_string(),
            gemini_base_url: "http://localhost:1234".to_string(),
            gemini_model: "gemini-3-flash-preview".to_string(),
            chat_poll_interval_ms: 250,
        };
        assert!(config.is_triage_configured());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    pub symptoms: String,
}

/// Structured advisory returned by the AI provider. Advisory only: callers
/// must always leave a manual path to booking open.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResponse {
    pub recommended_specialization: String,
    pub urgency: Urgency,
    pub explanation: String,
    pub possible_questions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "Low"),
            Urgency::Medium => write!(f, "Medium"),
            Urgency::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TriageError {
    #[error("AI triage is not configured")]
    NotConfigured,

    #[error("AI triage is currently unavailable")]
    ServiceUnavailable,
}

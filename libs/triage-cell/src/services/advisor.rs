use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{TriageError, TriageResponse};

const SYSTEM_INSTRUCTION: &str = "You are a professional medical triage assistant. You help patients identify the correct doctor specialization based on symptoms. Be helpful but always remind them you are an AI and they should consult a professional in emergencies. Return data in JSON format.";

/// Gemini generateContent client for symptom triage.
/// Based on: https://ai.google.dev/api/generate-content
#[derive(Debug)]
pub struct TriageService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl TriageService {
    pub fn new(config: &AppConfig) -> Result<Self, TriageError> {
        if !config.is_triage_configured() {
            return Err(TriageError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
        })
    }

    /// Asks the provider for a specialization recommendation and urgency for
    /// the given symptom description. Any transport, provider, or payload
    /// failure collapses to `ServiceUnavailable`; raw provider errors never
    /// reach callers.
    pub async fn triage(&self, symptoms: &str) -> Result<TriageResponse, TriageError> {
        info!("Requesting triage advisory");

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request_body = json!({
            "contents": [{
                "parts": [{
                    "text": format!(
                        "Analyze these symptoms and provide medical triage advice: \"{}\"",
                        symptoms
                    )
                }]
            }],
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "recommendedSpecialization": { "type": "STRING" },
                        "urgency": { "type": "STRING", "enum": ["Low", "Medium", "High"] },
                        "explanation": { "type": "STRING" },
                        "possibleQuestions": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": [
                        "recommendedSpecialization",
                        "urgency",
                        "explanation",
                        "possibleQuestions"
                    ]
                }
            }
        });

        debug!("Sending triage request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Triage provider unreachable: {}", e);
                TriageError::ServiceUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Triage provider returned {}: {}", status, body);
            return Err(TriageError::ServiceUnavailable);
        }

        let payload: Value = response.json().await.map_err(|e| {
            error!("Triage provider sent an unreadable response: {}", e);
            TriageError::ServiceUnavailable
        })?;

        let advisory_text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                error!("Triage provider response missing candidate text");
                TriageError::ServiceUnavailable
            })?;

        let advisory: TriageResponse = serde_json::from_str(advisory_text).map_err(|e| {
            error!("Triage advisory failed to parse as structured data: {}", e);
            TriageError::ServiceUnavailable
        })?;

        Ok(advisory)
    }
}

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::warn;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::TriageRequest;
use crate::services::advisor::TriageService;

const FALLBACK_MESSAGE: &str =
    "AI Triage is currently unavailable. Please proceed with manual booking.";

pub async fn perform_triage(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<TriageRequest>,
) -> Result<Json<Value>, AppError> {
    if request.symptoms.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Symptoms description is required".to_string(),
        ));
    }

    let service = TriageService::new(&config).map_err(|e| {
        warn!("Triage requested but not configured: {}", e);
        AppError::ExternalService(FALLBACK_MESSAGE.to_string())
    })?;

    match service.triage(&request.symptoms).await {
        Ok(advisory) => Ok(Json(json!(advisory))),
        Err(e) => {
            warn!("Triage advisory failed: {}", e);
            Err(AppError::ExternalService(FALLBACK_MESSAGE.to_string()))
        }
    }
}

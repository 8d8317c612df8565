use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{AppendMessageRequest, AppointmentError, AppointmentSearchQuery, BookAppointmentRequest};
use crate::services::store::{AppointmentDirectory, AppointmentStore};

pub async fn list_appointments(
    State(store): State<Arc<AppointmentStore>>,
    Query(query): Query<AppointmentSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = match query.patient_phone {
        Some(phone) => store.list_for_patient(&phone).await,
        None => store.list().await,
    };

    Ok(Json(json!(appointments)))
}

pub async fn get_appointment(
    State(store): State<Arc<AppointmentStore>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    match store.find(id).await {
        Some(appointment) => Ok(Json(json!(appointment))),
        None => Err(AppError::NotFound("Appointment not found".to_string())),
    }
}

pub async fn book_appointment(
    State(store): State<Arc<AppointmentStore>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    if request.patient_phone.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Patient phone is required".to_string(),
        ));
    }

    let appointment = store.book(request).await;
    Ok((StatusCode::CREATED, Json(json!(appointment))))
}

pub async fn get_chat_history(
    State(store): State<Arc<AppointmentStore>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    match store.find(id).await {
        Some(appointment) => Ok(Json(json!(appointment.chat_history))),
        None => Err(AppError::NotFound("Appointment not found".to_string())),
    }
}

pub async fn append_chat_message(
    State(store): State<Arc<AppointmentStore>>,
    Path(id): Path<Uuid>,
    Json(request): Json<AppendMessageRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let message = store
        .append_message(id, request.sender_role, &request.text)
        .await
        .map_err(|e| match e {
            AppointmentError::NotFound => {
                AppError::NotFound("Appointment not found".to_string())
            }
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
        })?;

    Ok((StatusCode::CREATED, Json(json!(message))))
}

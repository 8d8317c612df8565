use std::sync::Arc;

use assert_matches::assert_matches;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use appointment_cell::handlers::*;
use appointment_cell::models::{
    AppendMessageRequest, AppointmentSearchQuery, BookAppointmentRequest, HealthStatus,
    SenderRole,
};
use appointment_cell::{AppointmentDirectory, AppointmentStore};
use shared_models::error::AppError;

fn booking_request(phone: &str) -> BookAppointmentRequest {
    BookAppointmentRequest {
        patient_name: "Amira Hassan".to_string(),
        patient_phone: phone.to_string(),
        doctor_name: "Dr. Okafor".to_string(),
        appointment_date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
        appointment_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        patient_problem: "Persistent migraines".to_string(),
        health_status: HealthStatus::Fair,
    }
}

#[tokio::test]
async fn book_appointment_returns_created_with_the_new_record() {
    let store = Arc::new(AppointmentStore::new());

    let (status, body) = book_appointment(State(store.clone()), Json(booking_request("+111")))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.0["patient_phone"], "+111");
    assert_eq!(body.0["status"], "pending");
    assert!(body.0["chat_history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn book_appointment_rejects_blank_phone() {
    let store = Arc::new(AppointmentStore::new());

    let mut request = booking_request("+111");
    request.patient_phone = "   ".to_string();

    let error = book_appointment(State(store), Json(request)).await.unwrap_err();
    assert_matches!(&error, AppError::ValidationError(_));
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_appointments_filters_by_patient_phone() {
    let store = Arc::new(AppointmentStore::new());
    store.book(booking_request("+111")).await;
    store.book(booking_request("+222")).await;

    let body = list_appointments(
        State(store.clone()),
        Query(AppointmentSearchQuery {
            patient_phone: Some("+111".to_string()),
        }),
    )
    .await
    .unwrap();

    let appointments = body.0.as_array().unwrap().clone();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0]["patient_phone"], "+111");

    let all = list_appointments(
        State(store),
        Query(AppointmentSearchQuery { patient_phone: None }),
    )
    .await
    .unwrap();
    assert_eq!(all.0.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_appointment_maps_unknown_id_to_not_found() {
    let store = Arc::new(AppointmentStore::new());

    let error = get_appointment(State(store), Path(Uuid::new_v4()))
        .await
        .unwrap_err();

    assert_matches!(&error, AppError::NotFound(_));
    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn append_chat_message_returns_created_with_the_message() {
    let store = Arc::new(AppointmentStore::new());
    let appointment = store.book(booking_request("+111")).await;

    let (status, body) = append_chat_message(
        State(store.clone()),
        Path(appointment.id),
        Json(AppendMessageRequest {
            sender_role: SenderRole::Patient,
            text: "Hello doctor".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.0["sender_role"], "patient");
    assert_eq!(body.0["text"], "Hello doctor");
}

#[tokio::test]
async fn append_chat_message_maps_unknown_id_to_not_found() {
    let store = Arc::new(AppointmentStore::new());

    let error = append_chat_message(
        State(store),
        Path(Uuid::new_v4()),
        Json(AppendMessageRequest {
            sender_role: SenderRole::Patient,
            text: "Anyone there?".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert_matches!(&error, AppError::NotFound(_));
    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn append_chat_message_maps_blank_text_to_validation_error() {
    let store = Arc::new(AppointmentStore::new());
    let appointment = store.book(booking_request("+111")).await;

    let error = append_chat_message(
        State(store.clone()),
        Path(appointment.id),
        Json(AppendMessageRequest {
            sender_role: SenderRole::Patient,
            text: "   ".to_string(),
        }),
    )
    .await
    .unwrap_err();

    assert_matches!(&error, AppError::ValidationError(_));
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);

    // The rejected send left the thread untouched.
    let history = get_chat_history(State(store), Path(appointment.id)).await.unwrap();
    assert!(history.0.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_chat_history_returns_the_thread_in_order() {
    let store = Arc::new(AppointmentStore::new());
    let appointment = store.book(booking_request("+111")).await;
    store
        .append_message(appointment.id, SenderRole::Patient, "Hello")
        .await
        .unwrap();
    store
        .append_message(appointment.id, SenderRole::Doctor, "Hello, how can I help?")
        .await
        .unwrap();

    let body = get_chat_history(State(store), Path(appointment.id)).await.unwrap();

    let history = body.0.as_array().unwrap().clone();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["text"], "Hello");
    assert_eq!(history[1]["sender_role"], "doctor");
}

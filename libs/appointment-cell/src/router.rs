use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::store::AppointmentStore;

pub fn appointment_routes(store: Arc<AppointmentStore>) -> Router {
    Router::new()
        .route("/appointments", get(handlers::list_appointments))
        .route("/appointments", post(handlers::book_appointment))
        .route("/appointments/{id}", get(handlers::get_appointment))
        .route("/appointments/{id}/messages", get(handlers::get_chat_history))
        .route("/appointments/{id}/messages", post(handlers::append_chat_message))
        .with_state(store)
}

use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::AppointmentStore;
use shared_config::AppConfig;
use triage_cell::router::triage_routes;

pub fn create_router(config: Arc<AppConfig>, store: Arc<AppointmentStore>) -> Router {
    Router::new()
        .route("/", get(|| async { "MedSync API is running!" }))
        .merge(appointment_routes(store))
        .merge(triage_routes(config))
}

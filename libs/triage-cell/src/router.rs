use std::sync::Arc;

use axum::{routing::post, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn triage_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/triage", post(handlers::perform_triage))
        .with_state(state)
}

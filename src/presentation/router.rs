// Router wiring for the HTTP surface
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_reading, health_check};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/reading", get(get_reading))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// HTTP request handlers
use crate::application::glucose_service::ReadingReport;
use crate::presentation::app_state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Fetch and normalize the current snapshot. A failed fetch still returns the
/// all-absent reading, with 502 and the error text.
pub async fn get_reading(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadingReport>) {
    let report = state.glucose_service.reading_or_absent().await;

    let status = if report.error.is_some() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    (status, Json(report))
}

//! Route wiring for the survey API.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{dispatch_action, export_report_csv, get_dashboard, ApiState};

/// Builds the API router with tracing, CORS, and a request timeout.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api", post(dispatch_action))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/report/csv", get(export_report_csv))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}

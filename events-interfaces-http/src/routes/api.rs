use axum::routing::get;
use axum::Router;

use events_application::AppState;

use crate::handlers::{event_handlers, ops_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(event_handlers::welcome))
        .route("/events", get(event_handlers::list_events))
        .route("/events/find", get(event_handlers::find_events))
        .route("/ops/health/live", get(ops_handlers::health_live))
        .route("/ops/health/ready", get(ops_handlers::health_ready))
        .route("/ops/metrics/prometheus", get(ops_handlers::metrics_prometheus))
        .with_state(state)
}

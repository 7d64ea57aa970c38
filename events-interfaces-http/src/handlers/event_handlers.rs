use axum::extract::{Query, State};
use axum::Json;

use events_application::queries::event_queries;
use events_application::AppState;
use events_domain::{EventRecord, FindEventsParams, PaginatedResult};

use crate::error::HttpError;

pub const WELCOME_MESSAGE: &str = "Welcome to the Event Management System";

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<EventRecord>>, HttpError> {
    let events = event_queries::list_events(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Error fetching all events"))?;
    Ok(Json(events))
}

pub async fn find_events(
    State(state): State<AppState>,
    Query(params): Query<FindEventsParams>,
) -> Result<Json<PaginatedResult>, HttpError> {
    let result = event_queries::find_events(&state, params)
        .await
        .map_err(|err| HttpError::from_app(err, "Internal Server Error"))?;
    Ok(Json(result))
}

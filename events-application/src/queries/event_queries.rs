use tracing::{debug, error};

use events_domain::{
    aggregate, filter_candidates, parse_date, Coordinates, EventRecord, FindEventsParams,
    PaginatedResult, SearchQuery,
};

use crate::{AppError, AppState};

pub const MISSING_PARAMS_MESSAGE: &str = "Latitude, longitude, date, and page are required";

pub async fn list_events(state: &AppState) -> Result<Vec<EventRecord>, AppError> {
    state.event_source.load_all().await.map_err(|err| {
        error!("failed to load events: {}", err);
        state.metrics.record_source_error();
        AppError::Source(err)
    })
}

/// Filters the dataset to the 14-day window, enriches every candidate,
/// then sorts and paginates. Validation runs before any I/O.
pub async fn find_events(
    state: &AppState,
    params: FindEventsParams,
) -> Result<PaginatedResult, AppError> {
    let query = parse_search_query(params).inspect_err(|_| state.metrics.record_rejected_query())?;
    state.metrics.record_find_request();

    let records = list_events(state).await?;
    let candidates = filter_candidates(records, query.date);
    debug!(
        candidates = candidates.len(),
        window_start = %query.date,
        "candidates selected"
    );

    let enriched = state.enrichment.enrich(candidates, query.origin).await?;
    aggregate(enriched, query.page).map_err(|err| AppError::Aggregation(err.to_string()))
}

pub fn parse_search_query(params: FindEventsParams) -> Result<SearchQuery, AppError> {
    let (Some(latitude), Some(longitude), Some(date), Some(page)) = (
        non_empty(params.latitude),
        non_empty(params.longitude),
        non_empty(params.date),
        non_empty(params.page),
    ) else {
        return Err(AppError::BadRequest(MISSING_PARAMS_MESSAGE.to_string()));
    };

    let latitude = parse_coordinate(&latitude, "latitude", 90.0)?;
    let longitude = parse_coordinate(&longitude, "longitude", 180.0)?;
    let date = parse_date(&date).map_err(|err| AppError::BadRequest(format!("invalid date: {}", err)))?;
    let page = page
        .parse::<usize>()
        .ok()
        .filter(|page| *page >= 1)
        .ok_or_else(|| AppError::BadRequest("page must be a positive integer".to_string()))?;

    Ok(SearchQuery {
        origin: Coordinates {
            latitude,
            longitude,
        },
        date,
        page,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_coordinate(value: &str, name: &str, limit: f64) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite() && number.abs() <= limit)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "{} must be a number between -{} and {}",
                name, limit, limit
            ))
        })
}

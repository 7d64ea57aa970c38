use crate::entities::{EventRecord, PaginatedResult, PAGE_SIZE};
use crate::error::AggregationError;
use crate::services::response_shaper::shape;
use crate::utils::event_instant;

/// Sorts ascending by date and time, keeping source order for ties.
pub fn sort_events(records: &mut [EventRecord]) {
    records.sort_by_cached_key(|record| event_instant(&record.date, &record.time));
}

pub fn total_pages(total_events: usize) -> usize {
    total_events.div_ceil(PAGE_SIZE)
}

/// Sorts the full enriched set, then cuts out the requested 1-based page.
/// Pages past the end come back empty; totals always describe the full set.
pub fn aggregate(
    mut records: Vec<EventRecord>,
    page: usize,
) -> Result<PaginatedResult, AggregationError> {
    if page == 0 {
        return Err(AggregationError::InvalidPage(page));
    }
    sort_events(&mut records);

    let total_events = records.len();
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(total_events);
    let end = page.saturating_mul(PAGE_SIZE).min(total_events);
    let slice = records.drain(start..end).collect::<Vec<_>>();

    Ok(PaginatedResult {
        events: shape(slice),
        page,
        page_size: PAGE_SIZE,
        total_events,
        total_pages: total_pages(total_events),
    })
}

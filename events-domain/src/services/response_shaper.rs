use crate::entities::{EventRecord, ShapedEvent};

/// Drops the sort-only and coordinate columns before records leave the service.
pub fn shape(records: Vec<EventRecord>) -> Vec<ShapedEvent> {
    records.into_iter().map(ShapedEvent::from).collect()
}

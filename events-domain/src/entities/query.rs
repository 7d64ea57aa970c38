// Search query entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw `/events/find` parameters as they arrive on the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindEventsParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub date: Option<String>,
    pub page: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: Coordinates,
    pub date: NaiveDate,
    pub page: usize,
}

// Event entity
// One dataset row, optionally enriched with weather and distance

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dataset columns every row must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "event_name",
    "city_name",
    "date",
    "time",
    "latitude",
    "longitude",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position of the row in the dataset, 0-based.
    #[serde(skip)]
    pub row: usize,
    pub event_name: String,
    pub city_name: String,
    pub date: String,
    pub time: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl EventRecord {
    pub fn new(
        row: usize,
        event_name: impl Into<String>,
        city_name: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Self {
        Self {
            row,
            event_name: event_name.into(),
            city_name: city_name.into(),
            date: date.into(),
            time: time.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            extra: BTreeMap::new(),
            weather: None,
            distance_km: None,
        }
    }
}

/// Externally visible event: the record without its sort-only and
/// coordinate columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapedEvent {
    pub event_name: String,
    pub city_name: String,
    pub date: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl From<EventRecord> for ShapedEvent {
    fn from(record: EventRecord) -> Self {
        Self {
            event_name: record.event_name,
            city_name: record.city_name,
            date: record.date,
            extra: record.extra,
            weather: record.weather,
            distance_km: record.distance_km,
        }
    }
}

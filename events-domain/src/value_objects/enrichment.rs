// Enrichment value objects

use serde::{Deserialize, Serialize};

use crate::entities::EventRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrichmentKind {
    Weather,
    Distance,
}

impl EnrichmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrichmentKind::Weather => "weather",
            EnrichmentKind::Distance => "distance",
        }
    }
}

/// Settled result of one lookup for one record.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrichmentOutcome {
    Weather(serde_json::Value),
    Distance(f64),
    Absent(EnrichmentKind),
}

impl EnrichmentOutcome {
    /// Merges a successful value into the record. Absent outcomes leave it untouched.
    pub fn apply(self, record: &mut EventRecord) {
        match self {
            EnrichmentOutcome::Weather(weather) => record.weather = Some(weather),
            EnrichmentOutcome::Distance(distance) => record.distance_km = Some(distance),
            EnrichmentOutcome::Absent(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> EventRecord {
        EventRecord::new(0, "Expo", "Lyon", "2024-03-01", "10:00:00", "45.76", "4.83")
    }

    #[test]
    fn apply_merges_each_kind_independently() {
        let mut event = record();
        EnrichmentOutcome::Distance(12.5).apply(&mut event);
        assert_eq!(event.distance_km, Some(12.5));
        assert!(event.weather.is_none());

        EnrichmentOutcome::Weather(serde_json::json!("Sunny")).apply(&mut event);
        assert_eq!(event.weather, Some(serde_json::json!("Sunny")));
        assert_eq!(event.distance_km, Some(12.5));
    }

    #[test]
    fn absent_outcome_leaves_record_untouched() {
        let mut event = record();
        EnrichmentOutcome::Absent(EnrichmentKind::Weather).apply(&mut event);
        assert_eq!(event, record());
    }
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord, Trim};
use tokio::fs;
use tracing::debug;

use events_domain::{EventRecord, EventSource, SourceError, REQUIRED_COLUMNS};

/// Columns filled in by enrichment; a dataset column with these names is ignored.
const RESERVED_COLUMNS: [&str; 2] = ["weather", "distance_km"];

/// Reads the whole CSV dataset on every call. Nothing is cached.
pub struct CsvEventSource {
    path: String,
}

impl CsvEventSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for CsvEventSource {
    async fn load_all(&self) -> Result<Vec<EventRecord>, SourceError> {
        let bytes = fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Unavailable {
                path: self.path.clone(),
                source,
            })?;
        let records = parse_events(&bytes)?;
        debug!(path = %self.path, rows = records.len(), "dataset loaded");
        Ok(records)
    }
}

struct ColumnLayout {
    required: [usize; 6],
    extra: Vec<(usize, String)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self, SourceError> {
        let position = |name: &str| headers.iter().position(|header| header == name);

        let mut required = [0usize; 6];
        for (slot, name) in required.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = position(name).ok_or(SourceError::MissingColumn(name))?;
        }

        let mut extra = Vec::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty()
                || REQUIRED_COLUMNS.contains(&header)
                || RESERVED_COLUMNS.contains(&header)
                || position(header) != Some(index)
            {
                continue;
            }
            extra.push((index, header.to_string()));
        }
        Ok(Self { required, extra })
    }

    fn build(&self, row: usize, record: &StringRecord) -> EventRecord {
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        let [name, city, date, time, latitude, longitude] = self.required.map(field);
        let mut event = EventRecord::new(row, name, city, date, time, latitude, longitude);
        event.extra = self
            .extra
            .iter()
            .map(|(index, header)| (header.clone(), field(*index)))
            .collect::<BTreeMap<_, _>>();
        event
    }
}

/// Decodes CSV bytes with a header row into records, in file order.
pub fn parse_events(bytes: &[u8]) -> Result<Vec<EventRecord>, SourceError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|err| SourceError::Parse(err.to_string()))?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut events = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|err| SourceError::Parse(err.to_string()))?;
        events.push(layout.build(row, &record));
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const DATASET: &str = "\
event_name,city_name,date,time,latitude,longitude,venue
Harbor Lights,Port Jasonton,2024-03-01,19:00:00,40.71,-74.00,Pier 4
 Book Fair , Lake Andrew ,2024-03-04,,34.05,-118.24,
Short Row,Millfield,2024-03-05
";

    #[test]
    fn parses_rows_in_file_order() {
        let events = parse_events(DATASET.as_bytes()).unwrap();
        assert_eq!(events.len(), 3);

        assert_eq!(events[0].row, 0);
        assert_eq!(events[0].event_name, "Harbor Lights");
        assert_eq!(events[0].latitude, "40.71");
        assert_eq!(events[0].extra.get("venue").map(String::as_str), Some("Pier 4"));

        assert_eq!(events[1].event_name, "Book Fair");
        assert_eq!(events[1].city_name, "Lake Andrew");
        assert_eq!(events[1].time, "");

        assert_eq!(events[2].row, 2);
        assert_eq!(events[2].date, "2024-03-05");
        assert_eq!(events[2].longitude, "");
        assert!(events.iter().all(|event| event.weather.is_none() && event.distance_km.is_none()));
    }

    #[test]
    fn columns_may_appear_in_any_order() {
        let csv = "date,longitude,latitude,time,city_name,event_name\n2024-04-01,2.35,48.85,10:00:00,Paris,Salon\n";
        let events = parse_events(csv.as_bytes()).unwrap();
        assert_eq!(events[0].event_name, "Salon");
        assert_eq!(events[0].longitude, "2.35");
        assert!(events[0].extra.is_empty());
    }

    #[test]
    fn reserved_columns_are_not_passed_through() {
        let csv = "event_name,city_name,date,time,latitude,longitude,weather\nA,B,2024-04-01,10:00,1,2,Rain\n";
        let events = parse_events(csv.as_bytes()).unwrap();
        assert!(events[0].extra.is_empty());
        assert!(events[0].weather.is_none());
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "event_name,city_name,date,latitude,longitude\nA,B,2024-04-01,1,2\n";
        match parse_events(csv.as_bytes()) {
            Err(SourceError::MissingColumn(column)) => assert_eq!(column, "time"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn header_only_dataset_is_empty() {
        let csv = "event_name,city_name,date,time,latitude,longitude\n";
        assert!(parse_events(csv.as_bytes()).unwrap().is_empty());
    }

    #[tokio::test]
    async fn loads_from_disk_on_every_call() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();
        let source = CsvEventSource::new(file.path().to_string_lossy().to_string());

        assert_eq!(source.load_all().await.unwrap().len(), 3);

        file.write_all(b"Late Add,Millfield,2024-03-06,09:00:00,1.0,2.0,\n")
            .unwrap();
        file.flush().unwrap();
        assert_eq!(source.load_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn unreadable_file_is_unavailable() {
        let source = CsvEventSource::new("/definitely/not/here/events.csv");
        match source.load_all().await {
            Err(SourceError::Unavailable { path, .. }) => {
                assert_eq!(path, "/definitely/not/here/events.csv")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}

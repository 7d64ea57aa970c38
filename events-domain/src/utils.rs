use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    let trimmed = date.trim();
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|value| value.date_naive())
        .map_err(|_| anyhow!("unrecognized date '{}'", trimmed))
}

pub fn parse_time(time: &str) -> Result<NaiveTime> {
    let trimmed = time.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| anyhow!("unrecognized time '{}'", trimmed))
}

/// Composite sort instant. Empty or unreadable times count as midnight.
pub fn event_instant(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date).ok()?;
    let time = parse_time(time).unwrap_or(NaiveTime::MIN);
    Some(date.and_time(time))
}

use chrono::{Days, NaiveDate};

use crate::entities::EventRecord;
use crate::utils::parse_date;

/// Length of the search window, inclusive of both ends.
pub const WINDOW_DAYS: u64 = 14;

pub fn window_end(window_start: NaiveDate) -> NaiveDate {
    window_start
        .checked_add_days(Days::new(WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Keeps the records dated within `[window_start, window_start + 14 days]`,
/// in source order. Rows with an unreadable date are dropped.
pub fn filter_candidates(records: Vec<EventRecord>, window_start: NaiveDate) -> Vec<EventRecord> {
    let end = window_end(window_start);
    records
        .into_iter()
        .filter(|record| match parse_date(&record.date) {
            Ok(date) => date >= window_start && date <= end,
            Err(_) => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row: usize, date: &str) -> EventRecord {
        EventRecord::new(row, format!("event-{row}"), "Oslo", date, "12:00:00", "59.91", "10.75")
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let records = vec![
            record(0, "2024-02-29"),
            record(1, "2024-03-01"),
            record(2, "2024-03-15"),
            record(3, "2024-03-16"),
        ];
        let rows: Vec<usize> = filter_candidates(records, start())
            .iter()
            .map(|record| record.row)
            .collect();
        assert_eq!(rows, vec![1, 2]);
    }

    #[test]
    fn unreadable_dates_are_skipped_and_order_is_kept() {
        let records = vec![
            record(0, "2024-03-10"),
            record(1, "soon"),
            record(2, "2024-03-02"),
            record(3, ""),
            record(4, "2024-03-05"),
        ];
        let rows: Vec<usize> = filter_candidates(records, start())
            .iter()
            .map(|record| record.row)
            .collect();
        assert_eq!(rows, vec![0, 2, 4]);
    }

    #[test]
    fn window_end_is_fourteen_days_later() {
        assert_eq!(
            window_end(start()),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(window_end(NaiveDate::MAX), NaiveDate::MAX);
    }
}

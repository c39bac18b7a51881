/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Format a date as "03 Mar 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format a timestamp as "03 Mar 2025 14:02"
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d %b %Y %H:%M").to_string()
}

/// Format an event date range, collapsing the year when it matches.
/// Example: 2025-03-01 / 2025-03-03 -> "01 Mar – 03 Mar 2025"
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return format_date(start);
    }
    if start.year() == end.year() {
        format!("{} – {}", start.format("%d %b"), end.format("%d %b %Y"))
    } else {
        format!("{} – {}", format_date(start), format_date(end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(format_date(date), "03 Mar 2025");
    }

    #[test]
    fn test_format_datetime() {
        let datetime = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(format_datetime(datetime), "01 Mar 2025 14:02");
    }

    #[test]
    fn test_format_date_range() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(format_date_range(start, end), "01 Mar – 03 Mar 2025");

        assert_eq!(format_date_range(start, start), "01 Mar 2025");

        let next_year = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(
            format_date_range(start, next_year),
            "01 Mar 2025 – 02 Jan 2026"
        );
    }
}

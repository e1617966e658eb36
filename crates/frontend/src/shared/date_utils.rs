/// Utilities for date and time formatting
///
/// Provides consistent French date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as DD/MM/YYYY
/// Example: 2025-03-15 -> "15/03/2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a UTC timestamp as DD/MM/YYYY HH:MM:SS
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d/%m/%Y %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15/03/2024 14:02:26");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date(date), "31/12/2024");
    }
}

//! Parsing and pt-BR display of API timestamps.

use chrono::{DateTime, NaiveDateTime};

/// Accepts RFC 3339 (`2024-03-15T14:02:26Z`) and naive ISO timestamps
/// (`2024-03-15T14:02:26.123456`), the two shapes the API emits.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f").ok())
}

/// `15/03/2024, 14:02:26`; unparseable input is shown as is.
pub fn format_datetime(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%d/%m/%Y, %H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

/// Milliseconds since the epoch, used as the sort key of date columns.
pub fn timestamp_millis(value: &str) -> Option<i64> {
    parse_timestamp(value).map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024, 14:02:26");
        assert_eq!(format_datetime("2024-12-31T23:59:59"), "31/12/2024, 23:59:59");
        assert_eq!(format_datetime("2024-12-31 08:00:00"), "31/12/2024, 08:00:00");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(timestamp_millis(""), None);
    }

    #[test]
    fn test_ordering_key() {
        let a = timestamp_millis("2024-03-15T14:02:26Z").unwrap();
        let b = timestamp_millis("2024-03-15T14:02:27").unwrap();
        assert!(a < b);
    }
}

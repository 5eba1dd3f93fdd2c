//! Calendar dates at the record boundary.
//!
//! Records arrive with ISO-8601 strings. They are parsed once, here,
//! and everything downstream works on whole calendar days.
//!
//! # Accepted shapes
//! - `2025-06-01`
//! - `2025-06-01T09:30:00Z`, `2025-06-01T09:30:00+09:00` (RFC 3339)
//! - `2025-06-01T09:30`, `2025-06-01T09:30:00.000`, `2025-06-01 09:30:00`
//!
//! Time-of-day is discarded. For offset-bearing strings the date is the
//! one written in that offset, so `2025-06-01T00:00:00+09:00` is June 1.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{DateParseError, Result};

/// A whole calendar day with no time-of-day or zone.
pub type CalendarDate = NaiveDate;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 date or date-time into its calendar date.
pub fn parse_calendar_date(input: &str) -> Result<CalendarDate> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DateParseError::Missing);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| DateParseError::Unrecognized {
            input: s.to_string(),
        })
}

/// Parses an optional field, treating `None` as missing.
pub(crate) fn parse_optional(input: Option<&str>) -> Result<CalendarDate> {
    match input {
        Some(s) => parse_calendar_date(s),
        None => Err(DateParseError::Missing),
    }
}

/// ISO day key (`YYYY-MM-DD`) for a date.
pub fn iso_day(date: CalendarDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_date() {
        assert_eq!(parse_calendar_date("2025-06-01").unwrap(), ymd(2025, 6, 1));
        assert_eq!(parse_calendar_date("  2025-06-01 ").unwrap(), ymd(2025, 6, 1));
    }

    #[test]
    fn test_rfc3339_keeps_written_date() {
        assert_eq!(
            parse_calendar_date("2025-06-01T00:00:00Z").unwrap(),
            ymd(2025, 6, 1)
        );
        assert_eq!(
            parse_calendar_date("2025-06-01T23:59:59.999+09:00").unwrap(),
            ymd(2025, 6, 1)
        );
        assert_eq!(
            parse_calendar_date("2025-06-01T00:30:00-05:00").unwrap(),
            ymd(2025, 6, 1)
        );
    }

    #[test]
    fn test_naive_datetimes() {
        assert_eq!(parse_calendar_date("2025-06-01T00:00").unwrap(), ymd(2025, 6, 1));
        assert_eq!(
            parse_calendar_date("2025-06-01T18:45:12.250").unwrap(),
            ymd(2025, 6, 1)
        );
        assert_eq!(
            parse_calendar_date("2025-06-01 08:00:00").unwrap(),
            ymd(2025, 6, 1)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_calendar_date(""), Err(DateParseError::Missing));
        assert_eq!(parse_calendar_date("   "), Err(DateParseError::Missing));
        assert!(matches!(
            parse_calendar_date("not a date"),
            Err(DateParseError::Unrecognized { .. })
        ));
        assert!(parse_calendar_date("2025-02-30").is_err());
        assert!(parse_calendar_date("06/01/2025").is_err());
    }

    #[test]
    fn test_iso_day() {
        assert_eq!(iso_day(ymd(2025, 1, 9)), "2025-01-09");
    }
}

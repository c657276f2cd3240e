//! Hour-of-day extraction from the `Incident Time` column.
//!
//! Spreadsheet exports are inconsistent about how a time of day is written:
//! plain `14:23`, `14:23:00`, `2:23:00 PM`, or a full timestamp whose date part
//! is meaningless (Excel writes `1900-01-00`-style or `2000-01-01` prefixes).
//! Only the time of day matters, so any date component is discarded.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

const TIME_FORMATS: [&str; 5] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M", "%I:%M:%S %p", "%I:%M %p"];

const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Parse a time-of-day cell, ignoring any leading date.
///
/// Returns `None` if the text is not a recognizable time.
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.time())
        })
        .or_else(|| {
            // Dates chrono rejects: Excel's zero date "1900-01-00", "1/1/2000".
            let (date, time) = text.split_once(|c: char| c == ' ' || c == 'T')?;
            if !date.contains(|c: char| c == '-' || c == '/') {
                return None;
            }
            TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveTime::parse_from_str(time.trim(), fmt).ok())
        })
}

/// Bucket a time-of-day cell into one of 24 integer hours (0..=23).
///
/// ```
/// use sfpd_incident::hour::hour_of_day;
///
/// assert_eq!(hour_of_day("14:23:00"), Some(14));
/// assert_eq!(hour_of_day("2000-01-01 14:23:00"), Some(14));
/// ```
pub fn hour_of_day(text: &str) -> Option<u32> {
    parse_time_of_day(text).map(|t| t.hour())
}

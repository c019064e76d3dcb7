use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::errors::CoreError;
use crate::models::interval::Interval;
use crate::models::range::QUERY_DATE_FORMAT;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// `2024-03-05` → `"05-03-2024"`.
pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

/// Parse a trend bucket timestamp into its calendar date.
///
/// Accepts RFC 3339 (the date is taken in the offset as written, with no
/// conversion to local time), naive datetimes, plain `YYYY-MM-DD`, and
/// month buckets `YYYY-MM` (first of the month).
pub fn parse_time_period(raw: &str) -> Result<NaiveDate, CoreError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Ok(d);
    }

    Err(CoreError::InvalidDate(format!("time_period '{raw}'")))
}

/// Display label of a trend bucket for the given interval:
/// `"05 Mar 2024"` (daily) or `"Mar 2024"` (monthly).
pub fn format_period_label(date: NaiveDate, interval: Interval) -> String {
    date.format(interval.label_format()).to_string()
}

/// Parse and relabel in one step.
pub fn relabel_time_period(raw: &str, interval: Interval) -> Result<String, CoreError> {
    parse_time_period(raw).map(|d| format_period_label(d, interval))
}

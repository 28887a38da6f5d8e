//! Timestamp parsing and axis label formatting

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use linkstats_shared::{DashboardError, DashboardResult};

/// Parse a server timestamp.
///
/// Accepts RFC 3339 (what the server emits), a zone-less date-time and a bare
/// date. Zone-less values are taken as UTC.
pub fn parse_timestamp(value: &str) -> DashboardResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|parsed| parsed.and_utc())
        .ok_or_else(|| DashboardError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// Short month/day label ("Mar 1"); labels that are not timestamps are kept as is
pub fn format_day_label(label: &str) -> String {
    match parse_timestamp(label) {
        Ok(timestamp) => timestamp.format("%b %-d").to_string(),
        Err(_) => label.to_string(),
    }
}

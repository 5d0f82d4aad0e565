//! Parsing of the `savedAt` tool argument.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

use super::SaveError;

/// Offset-less date-time layouts, read as local wall-clock time.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 string into a local wall-clock time.
///
/// Accepts RFC 3339 with an offset or `Z` (converted to local time),
/// offset-less date-times (kept as written) and bare dates (midnight UTC,
/// converted to local time).
pub fn parse_saved_at(value: &str) -> Result<NaiveDateTime, SaveError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(dt);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            let utc: DateTime<Utc> = midnight.and_utc();
            return Ok(utc.with_timezone(&Local).naive_local());
        }
    }

    Err(SaveError::InvalidSavedAt {
        value: value.to_string(),
    })
}

/// Resolves an optional `savedAt` argument, defaulting to the current local time.
pub fn resolve_saved_at(value: Option<&str>) -> Result<NaiveDateTime, SaveError> {
    match value.filter(|s| !s.trim().is_empty()) {
        Some(s) => parse_saved_at(s),
        None => Ok(Local::now().naive_local()),
    }
}

use crate::error::ApiError;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const ATTRIBUTE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a caller-supplied timestamp.
///
/// Accepts RFC 3339 (`2020-03-13T17:30:45Z`, any offset) or
/// `YYYY-MM-DD HH:MM:SS`, which is taken as UTC.
///
/// # Errors
///
/// Returns [`ApiError::InvalidArgument`] if neither format matches.
#[track_caller]
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ApiError> {
    let trimmed = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, ATTRIBUTE_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| ApiError::invalid_argument(format!("Unparseable timestamp '{input}': {e}")))
}

/// `2020-03-13T17:30:45Z`, used by custom events and email opt-ins.
pub(crate) fn iso8601_utc(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `2020-03-13 17:30:45`, used by attribute updates.
pub(crate) fn attribute_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(ATTRIBUTE_TIMESTAMP_FORMAT).to_string()
}

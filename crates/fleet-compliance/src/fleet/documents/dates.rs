use super::super::domain::ExpiryValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Calendar date of a raw expiry value. Epoch milliseconds are read in UTC.
pub fn resolve_expiry(value: &ExpiryValue) -> Option<NaiveDate> {
    match value {
        ExpiryValue::Text(raw) => parse_expiry(raw),
        ExpiryValue::EpochMillis(millis) => {
            DateTime::from_timestamp_millis(*millis).map(|dt| dt.date_naive())
        }
    }
}

/// Parse expiry text into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (taking the calendar date in the
/// timestamp's own offset) and naive `YYYY-MM-DDTHH:MM:SS` timestamps.
/// Anything else, digit-only text included, yields `None`.
pub fn parse_expiry(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    None
}

/// Display form used in status payloads, e.g. `05 Mar 2027`.
pub fn format_display(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

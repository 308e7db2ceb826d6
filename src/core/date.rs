//! Lenient coercion of host snapshot cells into calendar dates.
//!
//! BI hosts deliver date cells in whatever shape the data model produced:
//! ISO strings, full datetimes with or without an offset, or epoch
//! milliseconds. Anything that does not resolve to a calendar date is
//! treated as absent, never as an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Coerces one host cell into a calendar date.
///
/// Booleans are a known host sentinel for "no value" and always map to
/// `None`, as do nulls, arrays, objects and unparseable strings.
#[must_use]
pub fn parse_host_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(text) => parse_date_str(text),
        Value::Number(number) => {
            let millis = number
                .as_i64()
                .or_else(|| number.as_f64().filter(|v| v.is_finite()).map(|v| v as i64))?;
            DateTime::from_timestamp_millis(millis).map(|instant| instant.date_naive())
        }
        _ => None,
    }
}

/// Parses a calendar date out of the string shapes hosts actually send.
///
/// A datetime with an explicit offset keeps the date as written in that
/// offset rather than shifting it through UTC; the slicer deals in wall
/// calendar dates only.
#[must_use]
pub fn parse_date_str(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y/%m/%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(datetime.date());
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.naive_local().date());
    }

    None
}

/// Formats a date as the local-midnight filter operand (`YYYY-MM-DDT00:00:00`).
///
/// Filter operands deliberately carry no offset suffix so the host applies
/// them against wall-clock dates instead of UTC-shifted instants.
#[must_use]
pub fn local_midnight_iso(date: NaiveDate) -> String {
    format!("{}T00:00:00", date.format("%Y-%m-%d"))
}

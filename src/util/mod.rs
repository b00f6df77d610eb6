//! Small helpers for lenient JSON extraction, timestamps and URL building.
//!
//! The portfolio API is not strict about its payloads: optional fields are
//! sometimes missing, sometimes `null`, ids come as numbers or strings. These
//! helpers read a `serde_json::Value` and fall back to neutral defaults instead
//! of failing the whole payload.

pub mod config;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is missing, `null`,
///   or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract an identifier that may be encoded as a string or a number.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(id)` for a non-empty string or any JSON number (decimal form); `None` for
///   missing, `null`, empty or other types.
#[must_use]
pub fn id_of(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// What: Extract an array of strings from a JSON object by key.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - The string elements of the array in order; non-string elements are dropped.
/// - An empty vector when the key is missing, `null` or not an array.
#[must_use]
pub fn arrs(v: &Value, key: &str) -> Vec<String> {
    v.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|e| e.as_str().map(ToOwned::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

/// What: Read a non-negative count from a JSON value.
///
/// Inputs:
/// - `n`: JSON value holding the count.
///
/// Output:
/// - `Some(u64)` for a non-negative integer, a non-negative finite float (rounded),
///   or a string parsing as either; `None` otherwise.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn count_of(n: &Value) -> Option<u64> {
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    if let Some(i) = n.as_i64() {
        return u64::try_from(i).ok();
    }
    let f = match n {
        Value::Number(num) => num.as_f64()?,
        Value::String(s) => {
            let t = s.trim();
            if let Ok(u) = t.parse::<u64>() {
                return Some(u);
            }
            t.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (f.is_finite() && f >= 0.0 && f <= u64::MAX as f64).then(|| f.round() as u64)
}

/// What: Read a boolean flag that may be encoded loosely.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(bool)` for JSON booleans, numbers (non-zero is true) and the strings accepted
///   by [`config::is_truthy`] / [`config::is_falsy`]; `None` for missing or unrecognized values.
#[must_use]
pub fn bool_of(v: &Value, key: &str) -> Option<bool> {
    match v.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f.abs() > f64::EPSILON),
        Value::String(s) if config::is_truthy(s) => Some(true),
        Value::String(s) if config::is_falsy(s) => Some(false),
        _ => None,
    }
}

/// What: Parse an API timestamp into epoch milliseconds.
///
/// Inputs:
/// - `raw`: Timestamp text.
///
/// Output:
/// - `Some(millis)` when the text parses, `None` otherwise.
///
/// Details:
/// - Accepts RFC 3339 (`2024-01-02T03:04:05Z`, offsets allowed), `YYYY-MM-DD HH:MM:SS`,
///   `YYYY-MM-DDTHH:MM:SS[.fff]` and bare `YYYY-MM-DD`.
/// - Forms without an offset are read as UTC.
#[must_use]
pub fn parse_timestamp_millis(raw: &str) -> Option<i64> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(ndt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc().timestamp_millis())
}

/// What: Render an API timestamp as a short `YYYY-MM-DD` date.
///
/// Inputs:
/// - `raw`: Optional timestamp text.
///
/// Output:
/// - The UTC date of the timestamp, or an empty string when missing or unparseable.
#[must_use]
pub fn short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp_millis)
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// What: Join a base URL and an endpoint path with exactly one slash.
///
/// Inputs:
/// - `base`: Base URL, with or without trailing slash.
/// - `path`: Endpoint path, with or without leading slash.
///
/// Output:
/// - The combined URL.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

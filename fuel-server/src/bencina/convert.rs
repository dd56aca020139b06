//! Unwrapping of Bencina response bodies.
//!
//! Both endpoints sometimes wrap their payload in `{"data": ...}` and
//! sometimes return it bare.

use serde_json::Value;

use crate::domain::StationRecord;

/// Station list from a search response.
///
/// Accepts a bare list or an object with a `data` list. Anything else,
/// including a missing `data`, yields an empty list. Non-object elements
/// are dropped.
pub fn station_list(body: Value) -> Vec<StationRecord> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("data") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(StationRecord::from_value)
        .collect()
}

/// Station record from a detail response.
///
/// Unwraps `data` when present; returns `None` if the result is not an
/// object.
pub fn station_detail(body: Value) -> Option<StationRecord> {
    match body {
        Value::Object(mut obj) => match obj.remove("data") {
            Some(data) => StationRecord::from_value(data),
            None => Some(StationRecord::new(obj)),
        },
        _ => None,
    }
}

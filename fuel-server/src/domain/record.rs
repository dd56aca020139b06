//! Loosely-typed upstream station records.
//!
//! The upstream API returns station objects whose keys vary in casing and
//! whose values may be strings, numbers, `null` or empty. Rather than
//! modelling every variant as a struct, records stay as JSON objects and
//! are read through accessors that try several keys and coerce values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::geo::Coordinates;

/// A single station as returned by the upstream API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationRecord(Map<String, Value>);

impl StationRecord {
    /// Wrap a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from an arbitrary JSON value.
    ///
    /// Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw field access, no alias handling.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Return the first present value among `keys`.
    ///
    /// `null`, `""` and the literal `"null"` count as absent.
    pub fn get_first(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|k| self.0.get(*k))
            .find(|v| is_present(v))
    }

    /// Text of the first present value among `keys`, or `""`.
    pub fn text(&self, keys: &[&str]) -> String {
        self.get_first(keys).map(value_text).unwrap_or_default()
    }

    /// Station identifier (`CodEs` or `id`), trimmed.
    ///
    /// Returns `None` when missing or blank.
    pub fn id(&self) -> Option<String> {
        let id = self.text(&["CodEs", "id"]);
        let id = id.trim();
        (!id.is_empty()).then(|| id.to_string())
    }

    /// Latitude and longitude, if both are present and numeric.
    pub fn coordinates(&self) -> Option<Coordinates> {
        let lat = self.get_first(&["latitud", "Latitud"]).and_then(parse_float)?;
        let lon = self
            .get_first(&["longitud", "Longitud"])
            .and_then(parse_float)?;
        Some(Coordinates::new(lat, lon))
    }

    /// Inline store object (`tienda` or `Tienda`), if non-empty.
    pub fn store_object(&self) -> Option<&Map<String, Value>> {
        ["tienda", "Tienda"]
            .iter()
            .filter_map(|k| self.0.get(*k))
            .find_map(|v| v.as_object().filter(|o| !o.is_empty()))
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }
}

impl From<Map<String, Value>> for StationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty() && s != "null",
        _ => true,
    }
}

/// Render a scalar JSON value as plain text.
///
/// Strings are returned without quotes; other values use their JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Parse a number that may arrive as a JSON number or a string.
///
/// Strings may use a comma as decimal separator (`"-33,7"`). Anything that
/// does not yield a finite number is `None`.
pub fn parse_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

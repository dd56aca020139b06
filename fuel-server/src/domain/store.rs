//! Convenience-store detection.
//!
//! Search results rarely carry full store information, so presence is
//! inferred from whatever the record offers: an explicit flag, an inline
//! store object, or the names of the services the station lists. The
//! heuristic errs towards `false`.

use serde_json::{Map, Value, json};

use super::record::{StationRecord, value_text};

/// Substrings of a service name that indicate a convenience store.
const STORE_KEYWORDS: [&str; 5] = ["tienda", "convenien", "minimarket", "pronto", "upita"];

/// Substrings that name a generic store, used when no brand matches.
const GENERIC_STORE_KEYWORDS: [&str; 3] = ["tienda", "convenien", "minimarket"];

/// Brand keywords and the store label they map to, in priority order.
const STORE_BRANDS: [(&str, &str); 3] = [
    ("pronto", "Pronto"),
    ("upita", "Upita"),
    ("spacio", "Spacio 1"),
];

const GENERIC_STORE_LABEL: &str = "Tienda de conveniencia";

/// Whether the record indicates an on-site convenience store.
///
/// Checks, in order: the `tiene_tienda` flag, a non-empty inline store
/// object, and finally the service names.
pub fn has_store(record: &StationRecord) -> bool {
    if has_store_flag(record) {
        return true;
    }
    if record.store_object().is_some() {
        return true;
    }
    service_names(record)
        .iter()
        .any(|name| STORE_KEYWORDS.iter().any(|k| name.contains(k)))
}

fn has_store_flag(record: &StationRecord) -> bool {
    match record.get("tiene_tienda") {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(s)) => {
            matches!(s.trim().to_lowercase().as_str(), "true" | "1" | "sí" | "si")
        }
        _ => false,
    }
}

/// Lower-cased names of the services a station lists.
///
/// The services field may be a list, or an object with the list under
/// `CodSer`. Elements are either objects carrying a `nombre` or bare
/// strings.
pub fn service_names(record: &StationRecord) -> Vec<String> {
    let services = match record.get_first(&["servicios", "Servicios"]) {
        Some(Value::Object(wrapper)) => wrapper.get("CodSer"),
        other => other,
    };

    services
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|service| match service {
            Value::Object(obj) => ["nombre", "Nombre"]
                .iter()
                .filter_map(|k| obj.get(*k))
                .find(|v| !v.is_null())
                .map(value_text),
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .map(|name| name.to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Derive a store label from the station's services.
///
/// Known brands win over the generic label; `None` when nothing in the
/// service list suggests a store.
pub fn store_label(record: &StationRecord) -> Option<&'static str> {
    let names = service_names(record);
    let mentions = |keyword: &str| names.iter().any(|n| n.contains(keyword));

    STORE_BRANDS
        .iter()
        .find(|(keyword, _)| mentions(keyword))
        .map(|(_, label)| *label)
        .or_else(|| {
            GENERIC_STORE_KEYWORDS
                .iter()
                .any(|k| mentions(k))
                .then_some(GENERIC_STORE_LABEL)
        })
}

/// Store object for a detail record: its own, or one built from services.
pub fn detail_store_object(detail: &StationRecord) -> Option<Map<String, Value>> {
    if let Some(store) = detail.store_object() {
        return Some(store.clone());
    }
    let label = store_label(detail)?;
    match json!({ "nombre": label, "fuente": "servicios" }) {
        Value::Object(obj) => Some(obj),
        _ => None,
    }
}

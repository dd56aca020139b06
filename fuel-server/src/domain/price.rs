//! Per-product price extraction.
//!
//! Stations publish prices in one of two shapes:
//!
//! - the legacy `Prices` list of `{Producto, Precio}` pairs, where product
//!   names are long-form ("Gasolina 93");
//! - the newer `combustibles` list of `{nombre_corto, precio}` objects,
//!   where names are short codes ("93", "di").
//!
//! The legacy list is consulted first.

use serde_json::Value;

use super::product::{Product, normalize_name};
use super::record::{StationRecord, parse_float, value_text};

/// Product names used by the legacy `Prices` list.
fn legacy_names(product: Product) -> &'static [&'static str] {
    match product {
        Product::Gasoline93 => &["gasolina 93", "93"],
        Product::Gasoline95 => &["gasolina 95", "95"],
        Product::Gasoline97 => &["gasolina 97", "97"],
        Product::Diesel => &["diesel", "petróleo diésel", "petroleo diesel"],
        Product::Kerosene => &["kerosene", "kerosén"],
    }
}

/// Whether a `combustibles` short name refers to `product`.
fn matches_short_name(product: Product, short_name: &str) -> bool {
    match product {
        Product::Diesel => {
            ["di", "diesel", "d", "petroleo di", "petróleo diésel"].contains(&short_name)
        }
        Product::Kerosene => ["kerosene", "kero", "kerosén"].contains(&short_name),
        gasoline => short_name == gasoline.key(),
    }
}

/// Objects in the list stored under the first present key.
fn object_list<'a>(
    record: &'a StationRecord,
    keys: &[&str],
) -> impl Iterator<Item = &'a serde_json::Map<String, Value>> {
    record
        .get_first(keys)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn field<'a>(item: &'a serde_json::Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| item.get(*k))
        .find(|v| !v.is_null() && v.as_str() != Some(""))
}

fn legacy_price(record: &StationRecord, product: Product) -> Option<f64> {
    let names = legacy_names(product);
    object_list(record, &["Prices", "prices"])
        .filter(|item| {
            let name = field(item, &["Producto", "producto"])
                .and_then(Value::as_str)
                .map(normalize_name)
                .unwrap_or_default();
            names.contains(&name.as_str())
        })
        .find_map(|item| field(item, &["Precio", "precio"]).and_then(parse_float))
}

fn combustible_price(record: &StationRecord, product: Product) -> Option<f64> {
    object_list(record, &["combustibles"])
        .filter(|item| {
            let short_name = item
                .get("nombre_corto")
                .map(|v| normalize_name(&value_text(v)))
                .unwrap_or_default();
            matches_short_name(product, &short_name)
        })
        .find_map(|item| item.get("precio").and_then(parse_float))
}

/// Price of `product` at this station, from whichever schema provides it.
///
/// An absent price is not an error: the station is still listed, it just
/// cannot win a cheapest-price comparison.
pub fn price_for(record: &StationRecord, product: Product) -> Option<f64> {
    legacy_price(record, product).or_else(|| combustible_price(record, product))
}

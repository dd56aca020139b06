//! Domain types for the fuel station finder.
//!
//! Upstream station records are loosely typed; this module holds the pure
//! functions that read them: product names, coordinates, prices and
//! store presence. Nothing here performs I/O.

mod geo;
mod price;
mod product;
mod record;
pub mod store;

pub use geo::{Coordinates, EARTH_RADIUS_KM, haversine_km};
pub use price::price_for;
pub use product::{InvalidProduct, Product, normalize_name};
pub use record::{StationRecord, parse_float, value_text};

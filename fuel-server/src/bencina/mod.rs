//! Bencina en Línea client.
//!
//! HTTP client for Chile's public fuel price API. Two endpoints matter:
//! - the filtered station search, which returns stations near a point
//!   with their current prices;
//! - the per-station detail ("estación ciudadano"), which adds the full
//!   service list.
//!
//! Records are returned loosely typed; see [`crate::domain::StationRecord`].

mod client;
mod convert;
mod error;
mod fixture;

pub use client::{BencinaClient, BencinaConfig};
pub use convert::{station_detail, station_list};
pub use error::BencinaError;
pub use fixture::fixture_stations;

//! Fuel station finder server.
//!
//! A web service that answers: "where is the nearest station selling this
//! fuel, optionally the cheapest one, optionally with a shop?" It proxies
//! the Bencina en Línea API and normalises its station records.

pub mod bencina;
pub mod domain;
pub mod finder;
pub mod web;

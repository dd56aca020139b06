//! The station returned to API callers.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Product, StationRecord, price_for, store};

use super::find::FindError;

/// A station with the fields the API exposes.
///
/// Field names on the wire follow the upstream's Spanish vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationOut {
    pub id: String,

    #[serde(rename = "compania")]
    pub company: String,

    #[serde(rename = "direccion")]
    pub address: String,

    #[serde(rename = "comuna")]
    pub commune: String,

    pub region: String,

    #[serde(rename = "latitud")]
    pub latitude: f64,

    #[serde(rename = "longitud")]
    pub longitude: f64,

    #[serde(rename = "distancia_km")]
    pub distance_km: f64,

    /// Price per canonical product key; `None` when the station does not
    /// publish one.
    #[serde(rename = "precios")]
    pub prices: BTreeMap<&'static str, Option<f64>>,

    #[serde(rename = "tiene_tienda")]
    pub has_store: bool,

    #[serde(rename = "tienda")]
    pub store: Option<Map<String, Value>>,
}

impl StationOut {
    /// Build the output for a selected station.
    ///
    /// `store_confirmed` records a store found through a detail lookup;
    /// `store_object` overrides the record's own store object.
    ///
    /// Fails with [`FindError::MissingCoordinates`] if the record has no
    /// usable coordinates, which enrichment should already have ruled out.
    pub fn build(
        record: &StationRecord,
        distance_km: f64,
        store_confirmed: bool,
        store_object: Option<&Map<String, Value>>,
    ) -> Result<Self, FindError> {
        let coordinates = record
            .coordinates()
            .ok_or(FindError::MissingCoordinates)?;

        let prices = Product::ALL
            .into_iter()
            .map(|p| (p.key(), price_for(record, p)))
            .collect();

        Ok(Self {
            id: record.id().unwrap_or_default(),
            company: record.text(&["Compania", "compania", "marca"]),
            address: record.text(&["Direccion", "direccion"]),
            commune: record.text(&["Comuna", "comuna"]),
            region: record.text(&["Region", "region"]),
            latitude: coordinates.lat,
            longitude: coordinates.lon,
            distance_km,
            prices,
            has_store: store::has_store(record) || store_confirmed,
            store: store_object.or_else(|| record.store_object()).cloned(),
        })
    }
}

//! In-memory station source for finder tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::{Value, json};

use crate::bencina::BencinaError;
use crate::domain::StationRecord;

use super::source::StationSource;

/// Build a record from JSON.
pub fn record(value: Value) -> StationRecord {
    StationRecord::from_value(value).unwrap()
}

/// A station in the legacy schema with a 93 price.
pub fn station(id: &str, lat: f64, lon: f64, price_93: Option<&str>) -> StationRecord {
    let prices = match price_93 {
        Some(p) => json!([{"Producto": "Gasolina 93", "Precio": p}]),
        None => json!([]),
    };
    record(json!({
        "CodEs": id,
        "Compania": format!("Station {id}"),
        "Latitud": lat.to_string(),
        "Longitud": lon.to_string(),
        "Prices": prices,
    }))
}

/// Mock source serving fixed search results and detail records.
pub struct MockSource {
    stations: Vec<StationRecord>,
    search_fails: bool,
    details: HashMap<String, StationRecord>,
    delay: Option<Duration>,
    detail_calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockSource {
    pub fn new(stations: Vec<StationRecord>) -> Self {
        Self {
            stations,
            search_fails: false,
            details: HashMap::new(),
            delay: None,
            detail_calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Make every search fail.
    pub fn failing_search() -> Self {
        Self {
            search_fails: true,
            ..Self::new(Vec::new())
        }
    }

    /// Serve `detail` for `id`. Ids without a detail get a 500.
    pub fn add_detail(&mut self, id: &str, detail: Value) {
        self.details.insert(id.to_string(), record(detail));
    }

    /// Delay every detail response.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Ids passed to `detail`, in call order.
    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }

    /// Highest number of concurrent detail calls seen.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl StationSource for MockSource {
    async fn search(&self, _lat: f64, _lng: f64) -> Result<Vec<StationRecord>, BencinaError> {
        if self.search_fails {
            return Err(BencinaError::Api {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.stations.clone())
    }

    async fn detail(&self, station_id: &str) -> Result<StationRecord, BencinaError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push(station_id.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.details
            .get(station_id)
            .cloned()
            .ok_or_else(|| BencinaError::Api {
                status: 500,
                message: format!("no detail for {station_id}"),
            })
    }
}

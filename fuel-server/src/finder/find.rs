//! Station search pipeline.
//!
//! One pass per request: fetch candidates, enrich them with distance and
//! price, optionally narrow to stations with a store and then to the
//! cheapest, and return the nearest survivor.

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::bencina::{BencinaError, fixture_stations};
use crate::domain::{Coordinates, InvalidProduct, Product, StationRecord, price_for, store};

use super::config::FinderConfig;
use super::output::StationOut;
use super::resolve::resolve_store_presence;
use super::source::StationSource;

/// Error from a station search.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// Requested product is not recognised
    #[error(transparent)]
    InvalidProduct(#[from] InvalidProduct),

    /// No candidate had usable coordinates
    #[error("no stations with valid coordinates")]
    NoStations,

    /// Store filter left nothing
    #[error("no stations with a store in the area")]
    NoStationsWithStore,

    /// Cheapest filter found no prices
    #[error("no prices for product {0}")]
    NoPrices(Product),

    /// Station search failed upstream
    #[error("station search failed: {0}")]
    Upstream(#[from] BencinaError),

    /// Selected station lost its coordinates
    #[error("selected station has no coordinates")]
    MissingCoordinates,
}

/// Parameters of a station search.
#[derive(Debug, Clone)]
pub struct FindRequest {
    /// Caller latitude.
    pub lat: f64,

    /// Caller longitude.
    pub lng: f64,

    /// Product name, as given by the caller.
    pub product: String,

    /// Only consider stations with a convenience store.
    pub store: bool,

    /// Only consider stations with the lowest price for the product.
    pub cheapest: bool,

    /// Use the fixture stations instead of searching upstream.
    pub mock: bool,
}

impl FindRequest {
    /// A nearest-station request with no filters.
    pub fn new(lat: f64, lng: f64, product: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            product: product.into(),
            store: false,
            cheapest: false,
            mock: false,
        }
    }

    /// Require a convenience store.
    pub fn with_store(mut self, store: bool) -> Self {
        self.store = store;
        self
    }

    /// Require the lowest price.
    pub fn with_cheapest(mut self, cheapest: bool) -> Self {
        self.cheapest = cheapest;
        self
    }

    /// Use fixture data.
    pub fn with_mock(mut self, mock: bool) -> Self {
        self.mock = mock;
        self
    }

    fn origin(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// A candidate station with the values computed for this request.
#[derive(Debug, Clone)]
pub struct EnrichedStation {
    pub record: StationRecord,

    /// Distance from the caller, in kilometres.
    pub distance_km: f64,

    /// Price of the requested product, if published.
    pub price: Option<f64>,

    /// Set when a detail lookup confirmed a store.
    pub store_confirmed: bool,

    /// Store object fetched after selection.
    pub store: Option<Map<String, Value>>,
}

impl EnrichedStation {
    /// Enrich a record, or `None` if it has no coordinates.
    pub fn from_record(
        record: StationRecord,
        origin: &Coordinates,
        product: Product,
    ) -> Option<Self> {
        let coordinates = record.coordinates()?;
        let distance_km = origin.distance_km(&coordinates);
        let price = price_for(&record, product);
        Some(Self {
            record,
            distance_km,
            price,
            store_confirmed: false,
            store: None,
        })
    }
}

/// Station finder.
pub struct Finder<'a, S: StationSource> {
    source: &'a S,
    config: &'a FinderConfig,
}

impl<'a, S: StationSource> Finder<'a, S> {
    /// Create a new finder.
    pub fn new(source: &'a S, config: &'a FinderConfig) -> Self {
        Self { source, config }
    }

    /// Find the best station for a request.
    pub async fn find(&self, request: &FindRequest) -> Result<StationOut, FindError> {
        let product = Product::parse(&request.product)?;

        let records = if request.mock {
            fixture_stations()
        } else {
            self.source.search(request.lat, request.lng).await?
        };

        let mut candidates = enrich(records, &request.origin(), product);
        if candidates.is_empty() {
            return Err(FindError::NoStations);
        }
        debug!(count = candidates.len(), %product, "enriched candidates");

        if request.store {
            candidates = self.filter_store(candidates).await;
            if candidates.is_empty() {
                return Err(FindError::NoStationsWithStore);
            }
        }

        if request.cheapest {
            candidates = filter_cheapest(candidates);
            if candidates.is_empty() {
                return Err(FindError::NoPrices(product));
            }
        }

        let mut best = select_nearest(candidates).ok_or(FindError::NoStations)?;

        if request.store && best.record.store_object().is_none() {
            best.store = self.backfill_store(&best.record).await;
        }

        info!(
            station_id = %best.record.id().unwrap_or_default(),
            distance_km = best.distance_km,
            price = ?best.price,
            "selected station"
        );

        StationOut::build(
            &best.record,
            best.distance_km,
            best.store_confirmed,
            best.store.as_ref(),
        )
    }

    /// Keep only candidates with a store.
    ///
    /// The local heuristic is tried first. Only if no candidate passes it
    /// are the nearest few checked against their detail records.
    async fn filter_store(&self, candidates: Vec<EnrichedStation>) -> Vec<EnrichedStation> {
        let (with_store, without): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|c| store::has_store(&c.record));
        if !with_store.is_empty() {
            return with_store;
        }

        let nearest = nearest_n(without, self.config.store_detail_limit);
        let records: Vec<StationRecord> = nearest.iter().map(|c| c.record.clone()).collect();
        debug!(count = records.len(), "checking station details for a store");

        let flags = resolve_store_presence(
            self.source,
            &records,
            self.config.store_concurrency,
            self.config.store_timeout,
        )
        .await;

        nearest
            .into_iter()
            .zip(flags)
            .filter(|(_, has_store)| *has_store)
            .map(|(mut c, _)| {
                c.store_confirmed = true;
                c
            })
            .collect()
    }

    /// Best-effort store object for the selected station.
    ///
    /// Any failure leaves the store object absent.
    async fn backfill_store(&self, record: &StationRecord) -> Option<Map<String, Value>> {
        let station_id = record.id()?;
        match self.source.detail(&station_id).await {
            Ok(detail) => store::detail_store_object(&detail),
            Err(e) => {
                warn!(%station_id, error = %e, "could not fetch store details");
                None
            }
        }
    }
}

/// Enrich every record that has coordinates.
pub fn enrich(
    records: Vec<StationRecord>,
    origin: &Coordinates,
    product: Product,
) -> Vec<EnrichedStation> {
    records
        .into_iter()
        .filter_map(|r| EnrichedStation::from_record(r, origin, product))
        .collect()
}

/// The `n` nearest candidates, nearest first. Ties keep input order.
pub fn nearest_n(mut candidates: Vec<EnrichedStation>, n: usize) -> Vec<EnrichedStation> {
    candidates.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    candidates.truncate(n);
    candidates
}

/// Keep every candidate priced at the minimum.
///
/// Returns an empty list when no candidate has a price.
pub fn filter_cheapest(candidates: Vec<EnrichedStation>) -> Vec<EnrichedStation> {
    let Some(min_price) = candidates
        .iter()
        .filter_map(|c| c.price)
        .min_by(f64::total_cmp)
    else {
        return Vec::new();
    };
    candidates
        .into_iter()
        .filter(|c| c.price == Some(min_price))
        .collect()
}

/// The nearest candidate; the first one wins a tie.
pub fn select_nearest(candidates: Vec<EnrichedStation>) -> Option<EnrichedStation> {
    candidates
        .into_iter()
        .min_by(|a, b| a.distance_km.total_cmp(&b.distance_km))
}

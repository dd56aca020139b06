//! Where the finder gets its stations from.

use std::future::Future;

use crate::bencina::{BencinaClient, BencinaError};
use crate::domain::StationRecord;

/// Provides station records to the finder.
///
/// Implemented by [`BencinaClient`]; tests substitute an in-memory source.
pub trait StationSource: Sync {
    /// Stations near a point.
    fn search(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl Future<Output = Result<Vec<StationRecord>, BencinaError>> + Send;

    /// Detail record for one station.
    fn detail(
        &self,
        station_id: &str,
    ) -> impl Future<Output = Result<StationRecord, BencinaError>> + Send;
}

impl StationSource for BencinaClient {
    async fn search(&self, lat: f64, lng: f64) -> Result<Vec<StationRecord>, BencinaError> {
        self.search_stations(lat, lng).await
    }

    async fn detail(&self, station_id: &str) -> Result<StationRecord, BencinaError> {
        self.station_detail(station_id).await
    }
}

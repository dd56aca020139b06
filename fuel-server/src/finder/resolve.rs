//! Bulk store-presence resolution.
//!
//! Search results often omit store information, so stations that fail the
//! local heuristic get a detail lookup. Lookups run concurrently behind a
//! semaphore; every station resolves to a bool, whatever happens to its
//! lookup.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{StationRecord, store};

use super::source::StationSource;

/// Resolve store presence for each station, preserving order.
///
/// Stations that pass [`store::has_store`] need no lookup. Stations without
/// an id resolve to `false` without one. The rest are checked against
/// their detail record, at most `concurrency` at a time, each bounded by
/// `timeout`. A failed or timed-out lookup resolves to `false`.
pub async fn resolve_store_presence<S: StationSource>(
    source: &S,
    stations: &[StationRecord],
    concurrency: usize,
    timeout: Duration,
) -> Vec<bool> {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));

    let checks = stations.iter().map(|station| {
        let permits = Arc::clone(&permits);
        async move {
            if store::has_store(station) {
                return true;
            }
            let Some(station_id) = station.id() else {
                return false;
            };
            let Ok(_permit) = permits.acquire().await else {
                return false;
            };
            detail_has_store(source, &station_id, timeout).await
        }
    });

    join_all(checks).await
}

/// Store presence according to the station's detail record.
///
/// Fails closed: any lookup error means no store.
pub async fn detail_has_store<S: StationSource>(
    source: &S,
    station_id: &str,
    timeout: Duration,
) -> bool {
    match tokio::time::timeout(timeout, source.detail(station_id)).await {
        Ok(Ok(detail)) => store::has_store(&detail),
        Ok(Err(e)) => {
            debug!(station_id, error = %e, "detail lookup failed");
            false
        }
        Err(_) => {
            debug!(station_id, ?timeout, "detail lookup timed out");
            false
        }
    }
}

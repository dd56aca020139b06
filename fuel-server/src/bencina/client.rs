//! Bencina en Línea HTTP client.
//!
//! Provides async methods for the two public endpoints the finder needs:
//! the nearby-station search and the per-station detail.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::domain::StationRecord;

use super::convert::{station_detail, station_list};
use super::error::BencinaError;

/// Default base URL for the Bencina API.
const DEFAULT_BASE_URL: &str = "https://api.bencinaenlinea.cl";

/// Public site the API expects requests to come from.
const SITE_URL: &str = "https://www.bencinaenlinea.cl";

const SEARCH_PATH: &str = "/api/busqueda_estacion_filtro";
const DETAIL_PATH: &str = "/api/estacion_ciudadano";

/// How much of an unparseable body to keep in errors.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the Bencina client.
#[derive(Debug, Clone)]
pub struct BencinaConfig {
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Timeout for station searches, in seconds
    pub search_timeout_secs: u64,
    /// Timeout for station details, in seconds
    pub detail_timeout_secs: u64,
}

impl BencinaConfig {
    /// Create a config pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            search_timeout_secs: 30,
            detail_timeout_secs: 20,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the search timeout.
    pub fn with_search_timeout(mut self, secs: u64) -> Self {
        self.search_timeout_secs = secs;
        self
    }

    /// Set the detail timeout.
    pub fn with_detail_timeout(mut self, secs: u64) -> Self {
        self.detail_timeout_secs = secs;
        self
    }
}

impl Default for BencinaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Bencina en Línea API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BencinaClient {
    http: reqwest::Client,
    base_url: String,
    search_timeout: Duration,
    detail_timeout: Duration,
}

impl BencinaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BencinaConfig) -> Result<Self, BencinaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers.insert(ORIGIN, HeaderValue::from_static(SITE_URL));
        headers.insert(REFERER, HeaderValue::from_static("https://www.bencinaenlinea.cl/"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            search_timeout: Duration::from_secs(config.search_timeout_secs),
            detail_timeout: Duration::from_secs(config.detail_timeout_secs),
        })
    }

    /// Search for stations around a point.
    ///
    /// The coordinates are forwarded as-is; the upstream decides the
    /// search radius.
    pub async fn search_stations(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<StationRecord>, BencinaError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        debug!(lat, lng, "searching stations");

        let response = self
            .http
            .get(&url)
            .query(&[("latitud", lat.to_string()), ("longitud", lng.to_string())])
            .timeout(self.search_timeout)
            .send()
            .await?;

        let body = read_json(response, None).await?;
        let stations = station_list(body);
        debug!(count = stations.len(), "station search returned");
        Ok(stations)
    }

    /// Get the detail record for one station.
    ///
    /// Detail records carry the full service list, which search results
    /// often omit.
    pub async fn station_detail(&self, station_id: &str) -> Result<StationRecord, BencinaError> {
        let url = format!("{}{}/{}", self.base_url, DETAIL_PATH, station_id);
        debug!(station_id, "fetching station detail");

        let response = self
            .http
            .get(&url)
            .timeout(self.detail_timeout)
            .send()
            .await?;

        let body = read_json(response, Some(station_id)).await?;
        station_detail(body).ok_or_else(|| BencinaError::Json {
            message: "station detail is not an object".to_string(),
            body: None,
        })
    }
}

/// Check the status and parse the body as JSON.
///
/// `station_id` turns a 404 into `StationNotFound`.
async fn read_json(
    response: reqwest::Response,
    station_id: Option<&str>,
) -> Result<Value, BencinaError> {
    let status = response.status();

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(BencinaError::RateLimited);
    }

    if status == reqwest::StatusCode::NOT_FOUND
        && let Some(id) = station_id
    {
        return Err(BencinaError::StationNotFound(id.to_string()));
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BencinaError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| BencinaError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
    })
}

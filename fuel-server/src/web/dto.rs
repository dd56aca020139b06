//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::finder::FindRequest;

/// Query parameters for the station search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Caller latitude
    pub lat: f64,

    /// Caller longitude
    pub lng: f64,

    /// Product name: 93, 95, 97, diesel, kerosene or an alias
    pub product: String,

    /// Return the nearest station. Always the case; kept so existing
    /// clients that send it are accepted.
    #[serde(default = "default_true")]
    pub nearest: bool,

    /// Require a convenience store
    #[serde(default)]
    pub store: bool,

    /// Restrict to the lowest price
    #[serde(default)]
    pub cheapest: bool,

    /// 1 = serve fixture data instead of querying upstream
    #[serde(default)]
    pub mock: i64,
}

fn default_true() -> bool {
    true
}

impl SearchQuery {
    /// Convert into a finder request.
    pub fn to_request(&self) -> FindRequest {
        FindRequest::new(self.lat, self.lng, self.product.clone())
            .with_store(self.store)
            .with_cheapest(self.cheapest)
            .with_mock(self.mock == 1)
    }
}

/// Successful response wrapper.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Service banner returned at the root path.
#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
}

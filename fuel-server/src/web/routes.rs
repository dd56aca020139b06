//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::finder::{FindError, Finder, StationOut};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Service banner.
async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Fuel station API OK. Use /api/stations/search to find a station.",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Find the best station around a point.
async fn search_stations(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SuccessResponse<StationOut>>, AppError> {
    let request = query.to_request();
    let finder = Finder::new(state.bencina.as_ref(), state.config.as_ref());
    let station = finder.find(&request).await?;
    Ok(Json(SuccessResponse::new(station)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<FindError> for AppError {
    fn from(e: FindError) -> Self {
        let message = e.to_string();
        match e {
            FindError::InvalidProduct(_) => AppError::BadRequest { message },
            FindError::NoStations | FindError::NoStationsWithStore | FindError::NoPrices(_) => {
                AppError::NotFound { message }
            }
            FindError::Upstream(_) | FindError::MissingCoordinates => {
                AppError::Internal { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

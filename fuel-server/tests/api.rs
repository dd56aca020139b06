//! End-to-end tests for the HTTP API.
//!
//! Requests go through the full router with `tower::ServiceExt::oneshot`.
//! Upstream calls hit a `wiremock` server, or nothing at all in mock mode.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fuel_server::bencina::{BencinaClient, BencinaConfig};
use fuel_server::finder::FinderConfig;
use fuel_server::web::{AppState, create_router};

/// Router whose upstream is `base_url`.
fn app(base_url: &str) -> Router {
    let client = BencinaClient::new(
        BencinaConfig::new()
            .with_base_url(base_url)
            .with_search_timeout(2)
            .with_detail_timeout(2),
    )
    .unwrap();
    create_router(AppState::new(client, FinderConfig::default()))
}

/// Router with an upstream nothing listens on.
fn offline_app() -> Router {
    app("http://127.0.0.1:9")
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn banner_and_health() {
    let (status, body) = get(offline_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("/api/stations/search"));

    let response = offline_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn mock_mode_returns_nearest_fixture() {
    let (status, body) = get(
        offline_app(),
        "/api/stations/search?lat=-33.7335&lng=-70.7422&product=93&mock=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let data = &body["data"];
    assert_eq!(data["id"], json!("1001"));
    assert_eq!(data["compania"], json!("COPEC"));
    assert_eq!(data["distancia_km"], json!(0.0));
    assert_eq!(data["precios"]["93"], json!(1290.0));
}

#[tokio::test]
async fn mock_mode_cheapest() {
    let (status, body) = get(
        offline_app(),
        "/api/stations/search?lat=-33.7335&lng=-70.7422&product=gasolina%2093&cheapest=true&mock=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!("1002"));
    assert_eq!(body["data"]["precios"]["93"], json!(1285.0));
}

#[tokio::test]
async fn mock_mode_store_uses_inline_store() {
    let (status, body) = get(
        offline_app(),
        "/api/stations/search?lat=-33.65&lng=-70.72&product=95&store=true&mock=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!("1001"));
    assert_eq!(body["data"]["tiene_tienda"], json!(true));
    assert_eq!(body["data"]["tienda"]["NombreTienda"], json!("Pronto Copec"));
}

#[tokio::test]
async fn invalid_product_is_bad_request() {
    let (status, body) = get(
        offline_app(),
        "/api/stations/search?lat=-33.7&lng=-70.7&product=98&mock=1",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("invalid product"));
}

#[tokio::test]
async fn missing_coordinates_are_rejected() {
    let response = offline_app()
        .oneshot(
            Request::get("/api/stations/search?lng=-70.7&product=93")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_unreachable_is_internal_error() {
    let (status, body) = get(
        offline_app(),
        "/api/stations/search?lat=-33.7&lng=-70.7&product=93",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn live_search_with_store_fallback() {
    let server = MockServer::start().await;

    // Neither station advertises a store in the search results.
    Mock::given(method("GET"))
        .and(path("/api/busqueda_estacion_filtro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "CodEs": "near",
                    "Compania": "SHELL",
                    "Latitud": "-33.70",
                    "Longitud": "-70.70",
                    "combustibles": [{"nombre_corto": "93", "precio": "1300"}],
                },
                {
                    "CodEs": "far",
                    "Compania": "COPEC",
                    "Latitud": "-33.80",
                    "Longitud": "-70.80",
                    "combustibles": [{"nombre_corto": "93", "precio": "1250"}],
                },
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/estacion_ciudadano/near"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"servicios": [{"nombre": "Lavado"}]}
        })))
        .mount(&server)
        .await;

    // Answers both the resolution lookup and the backfill.
    Mock::given(method("GET"))
        .and(path("/api/estacion_ciudadano/far"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"servicios": {"CodSer": [{"nombre": "Upita"}]}}
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (status, body) = get(
        app(&server.uri()),
        "/api/stations/search?lat=-33.70&lng=-70.70&product=93&store=true",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["id"], json!("far"));
    assert_eq!(data["tiene_tienda"], json!(true));
    assert_eq!(data["tienda"], json!({"nombre": "Upita", "fuente": "servicios"}));
    assert_eq!(data["precios"]["93"], json!(1250.0));
}

#[tokio::test]
async fn live_search_no_prices_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/busqueda_estacion_filtro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"CodEs": "1", "Latitud": "-33.7", "Longitud": "-70.7"},
        ])))
        .mount(&server)
        .await;

    let (status, body) = get(
        app(&server.uri()),
        "/api/stations/search?lat=-33.7&lng=-70.7&product=kerosene&cheapest=true",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("no prices for product kerosene"));
}

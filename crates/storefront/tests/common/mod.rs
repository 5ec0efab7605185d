//! Shared helpers for storefront router tests.
//!
//! Each test builds the real router against an `httpmock` server standing in
//! for the inventory API, then drives it with `tower::ServiceExt::oneshot`.

#![allow(dead_code, clippy::unwrap_used)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use httpmock::MockServer;
use qr_inventory_storefront::{app, config::StorefrontConfig, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;
use url::Url;

pub const LOOKUP_PATH: &str = "/api/User/GetUserId";
pub const LISTING_PATH: &str = "/api/Mobile/GetAllInventoryMobilesByUser";

/// Router wired to `server`, with rate limiting off.
pub fn router(server: &MockServer) -> Router {
    app(AppState::new(config_for(server)).unwrap())
}

/// Router wired to `server`, with the production rate limits.
pub fn rate_limited_router(server: &MockServer) -> Router {
    let mut config = config_for(server);
    config.rate_limit = true;
    app(AppState::new(config).unwrap())
}

fn config_for(server: &MockServer) -> StorefrontConfig {
    StorefrontConfig::for_api(Url::parse(&server.base_url()).unwrap())
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// GET as HTMX would issue it from a page showing `current_url`.
pub async fn htmx_get(router: &Router, uri: &str, current_url: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("hx-request", "true")
        .header("hx-current-url", current_url)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .map(|value| value.to_str().unwrap())
}

/// A lookup response for a known business.
pub fn business_json(user_id: u64) -> Value {
    json!({
        "userId": user_id,
        "name": "Amrit Mobiles",
        "address1": "1 Main St",
        "state": "Punjab",
        "country": "India",
        "mobileNumber": "+91 98765 43210"
    })
}

/// A listing item with `media_count` images.
pub fn mobile_json(id: u64, status: i64, media_count: usize) -> Value {
    let medias: Vec<Value> = (0..media_count)
        .map(|i| json!({ "original": format!("https://img.example.com/{id}-{i}.jpg") }))
        .collect();
    json!({
        "id": id,
        "name": format!("Phone {id}"),
        "storage": "128GB",
        "color": "Black",
        "productStatus": status,
        "batteryHealth": 91,
        "condition": "used",
        "mobileMedias": medias
    })
}

//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Resolver (optional ?websiteName=)
//! GET  /{website_name}         - Resolver
//!
//! # Inventory
//! GET  /inventory              - Viewer shell
//! GET  /inventory/results      - Results fragment (HTMX), full page otherwise
//! GET  /inventory/carousel     - Carousel fragment (HTMX)
//! GET  /inventory/modal        - Image modal fragment (HTMX)
//! ```

pub mod carousel;
pub mod inventory;
pub mod modal;
pub mod resolver;

use axum::{Router, middleware::from_fn, routing::get};

use crate::middleware::{listing_rate_limiter, lookup_rate_limiter};
use crate::state::AppState;

/// Create the resolver routes router. Every request costs one upstream lookup.
pub fn resolver_routes(rate_limit: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(resolver::index))
        .route("/{website_name}", get(resolver::by_name));

    if rate_limit {
        router.layer(lookup_rate_limiter())
    } else {
        router
    }
}

/// Create the inventory routes router.
///
/// Only the results fragment reaches the listing endpoint, so it is the only
/// rate-limited inventory route; carousel polls and modal toggles are local.
/// A limited HTMX request gets the throttled error card in place of paging
/// silently doing nothing.
pub fn inventory_routes(rate_limit: bool) -> Router<AppState> {
    let results = Router::new().route("/results", get(inventory::results));
    let results = if rate_limit {
        results
            .layer(listing_rate_limiter())
            .layer(from_fn(inventory::throttled_fragment))
    } else {
        results
    };

    Router::new()
        .route("/", get(inventory::show))
        .route("/carousel", get(carousel::step))
        .route("/modal", get(modal::show))
        .merge(results)
}

/// Create all routes for the storefront.
pub fn routes(rate_limit: bool) -> Router<AppState> {
    Router::new()
        .nest("/inventory", inventory_routes(rate_limit))
        .merge(resolver_routes(rate_limit))
}

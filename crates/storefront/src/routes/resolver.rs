//! Identity resolver: website name in, redirect to the inventory viewer out.
//!
//! This is where a scanned QR code lands. The response is always a
//! `303 See Other`, so the entry URL never stays in the browser history and
//! the browser's own navigation indicator covers the lookup.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use qr_inventory_core::view::{ResolveOutcome, pick_website_name};
use serde::Deserialize;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::state::AppState;

/// Query parameters accepted by both resolver routes.
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    #[serde(rename = "websiteName")]
    pub website_name: Option<String>,
}

/// `GET /?websiteName=`
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Redirect {
    resolve(&state, None, params.website_name.as_deref()).await
}

/// `GET /{website_name}`
pub async fn by_name(
    State(state): State<AppState>,
    Path(website_name): Path<String>,
    Query(params): Query<ResolveParams>,
) -> Redirect {
    resolve(&state, Some(&website_name), params.website_name.as_deref()).await
}

/// Look the business up once and redirect according to the outcome.
#[instrument(skip(state))]
async fn resolve(state: &AppState, path: Option<&str>, query: Option<&str>) -> Redirect {
    let config = state.config();
    let website_name = pick_website_name(path, query, &config.inventory.fallback_website);

    let outcome = match state.inventory().lookup_business(website_name).await {
        Ok(Some(business)) => {
            tracing::info!(
                website_name,
                user_id = %business.user_id,
                "Resolved business"
            );
            add_breadcrumb(
                "resolver",
                "Business resolved",
                Some(&[
                    ("website_name", website_name),
                    ("user_id", business.user_id.as_str()),
                ]),
            );
            let user_id = business.user_id.clone();
            state.identities().insert(business).await;
            ResolveOutcome::Found(user_id)
        }
        Ok(None) => {
            tracing::warn!(website_name, "User not found for website name");
            ResolveOutcome::NotFound
        }
        Err(e) => {
            let event_id = sentry::capture_error(&e);
            tracing::error!(
                error = %e,
                website_name,
                sentry_event_id = %event_id,
                "Business lookup failed"
            );
            ResolveOutcome::Failed
        }
    };

    Redirect::to(&outcome.location(config.inventory.page_size))
}

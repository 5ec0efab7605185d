//! Inventory API client implementation.
//!
//! Plain JSON over `reqwest` 0.13. Responses are read as text first so that
//! failures can be logged with the offending body.

use std::sync::Arc;

use qr_inventory_core::{BusinessIdentity, InventoryPage, InventoryQuery, UserLookup};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::InventoryApiError;
use crate::config::InventoryApiConfig;

const LOOKUP_PATH: &str = "api/User/GetUserId";
const LISTING_PATH: &str = "api/Mobile/GetAllInventoryMobilesByUser";

/// Characters of an upstream body kept in logs.
const LOG_BODY_LIMIT: usize = 500;

// =============================================================================
// InventoryClient
// =============================================================================

/// Client for the inventory API.
///
/// Cheap to clone. Every call issues exactly one request; nothing is retried.
#[derive(Clone)]
pub struct InventoryClient {
    inner: Arc<InventoryClientInner>,
}

struct InventoryClientInner {
    client: reqwest::Client,
    lookup_url: Url,
    listing_url: Url,
}

impl InventoryClient {
    /// Create a new inventory API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URLs cannot be built from the base URL
    /// or the HTTP client cannot be constructed.
    pub fn new(config: &InventoryApiConfig) -> Result<Self, InventoryApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            inner: Arc::new(InventoryClientInner {
                client,
                lookup_url: config.base_url.join(LOOKUP_PATH)?,
                listing_url: config.base_url.join(LISTING_PATH)?,
            }),
        })
    }

    /// GET `url` with `query` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        query: &[(&str, String)],
    ) -> Result<T, InventoryApiError> {
        let response = self
            .inner
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(InventoryApiError::RateLimited(retry_after));
        }

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&body, LOG_BODY_LIMIT),
                "Inventory API returned non-success status"
            );
            return Err(InventoryApiError::Status {
                status,
                body: truncate(&body, 200),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&body, LOG_BODY_LIMIT),
                "Failed to parse inventory API response"
            );
            InventoryApiError::Parse(e)
        })
    }

    /// Look up the business behind a website name.
    ///
    /// Returns `Ok(None)` when the API knows no such business: a body without
    /// a usable `userId`, a `null` body, or a 404.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with any other
    /// non-success status, or the body is not JSON.
    #[instrument(skip(self))]
    pub async fn lookup_business(
        &self,
        website_name: &str,
    ) -> Result<Option<BusinessIdentity>, InventoryApiError> {
        let lookup: Result<Option<UserLookup>, _> = self
            .get_json(
                &self.inner.lookup_url,
                &[("websiteName", website_name.to_string())],
            )
            .await;

        match lookup {
            Ok(lookup) => {
                let identity = lookup.and_then(UserLookup::into_identity);
                debug!(found = identity.is_some(), "Business lookup finished");
                Ok(identity)
            }
            Err(InventoryApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch one page of a user's inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body is not a listing.
    #[instrument(skip(self), fields(user_id = %query.user_id, skip = query.skip, take = query.take.get(), sort_by = %query.sort_by))]
    pub async fn list_inventory(
        &self,
        query: &InventoryQuery,
    ) -> Result<InventoryPage, InventoryApiError> {
        let page: Option<InventoryPage> = self
            .get_json(&self.inner.listing_url, &query.query_pairs())
            .await?;
        let page = page.unwrap_or_default();
        debug!(
            items = page.mobiles.len(),
            total_count = page.total_count,
            "Inventory page fetched"
        );
        Ok(page)
    }
}

fn truncate(body: &str, limit: usize) -> String {
    body.chars().take(limit).collect()
}

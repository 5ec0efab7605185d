//! Inventory API client and the transient identity cache.
//!
//! # Architecture
//!
//! - The inventory API is the source of truth; listings are fetched fresh on
//!   every query and never cached
//! - Business identities from the lookup endpoint are kept in a short-lived
//!   `moka` cache so the viewer can render the business header after the
//!   resolver redirect
//!
//! # Endpoints
//!
//! - `GET api/User/GetUserId?websiteName=` - business lookup
//! - `GET api/Mobile/GetAllInventoryMobilesByUser?userId=&skip=&take=&sortBy=` - listing
//!
//! # Example
//!
//! ```rust,ignore
//! use qr_inventory_storefront::inventory::InventoryClient;
//!
//! let client = InventoryClient::new(&config.inventory)?;
//!
//! if let Some(business) = client.lookup_business("Amrittest").await? {
//!     let query = InventoryQuery::first_page(business.user_id.clone(), DEFAULT_TAKE);
//!     let page = client.list_inventory(&query).await?;
//! }
//! ```

mod cache;
mod client;

pub use cache::IdentityCache;
pub use client::InventoryClient;

use thiserror::Error;

/// Errors that can occur when talking to the inventory API.
#[derive(Debug, Error)]
pub enum InventoryApiError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by the API.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// An endpoint URL could not be built from the configured base URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

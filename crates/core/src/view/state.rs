//! Viewer state machine.
//!
//! ```text
//!            query change
//!   ┌──────────────────────────────┐
//!   ▼                              │
//! Loading ──► Error | Empty | Populated
//! ```
//!
//! `Error`, `Empty` and `Populated` are terminal for one fetch cycle. There
//! is no retry transition: the only way back to `Loading` is a new query.

use std::num::NonZeroU32;

use crate::types::{InventoryPage, InventoryParams, InventoryQuery};

/// Why the viewer could not show inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ViewError {
    /// The URL carried no `userId`.
    #[error("no identifier present")]
    NoIdentifier,
    /// The resolver found no business for the website name.
    #[error("business lookup returned no user")]
    LookupNotFound,
    /// The resolver's lookup request failed.
    #[error("business lookup failed")]
    LookupFailed,
    /// The listing request failed.
    #[error("inventory listing failed")]
    Transport,
    /// This client sent too many listing requests.
    #[error("too many listing requests")]
    Throttled,
}

impl ViewError {
    /// Message shown to the end user. Never includes transport details.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoIdentifier => "No identifier present",
            Self::LookupNotFound => {
                "We couldn't find this business. Please scan a valid QR code."
            }
            Self::LookupFailed | Self::Transport => {
                "Please scan a valid QR code or try again later."
            }
            Self::Throttled => "Too many requests. Please wait a moment and reload the page.",
        }
    }
}

/// A fetched, non-empty page together with the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryResults {
    pub query: InventoryQuery,
    pub page: InventoryPage,
}

impl InventoryResults {
    /// Pagination controls for this page.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        let total_count = self.page.total_count;
        Pagination {
            page_number: self.query.page_number(),
            total_count,
            prev: self.query.has_prev().then(|| self.query.prev_page()),
            next: self
                .query
                .has_next(total_count)
                .then(|| self.query.next_page()),
        }
    }
}

/// Prev/next state for a populated page. A `None` link is a disabled control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page_number: u32,
    pub total_count: u64,
    pub prev: Option<InventoryQuery>,
    pub next: Option<InventoryQuery>,
}

/// What the inventory view is showing. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch for this query is outstanding.
    Loading(InventoryQuery),
    Error(ViewError),
    /// The fetch succeeded with no items.
    Empty,
    Populated(InventoryResults),
}

impl ViewState {
    /// Initial state for a set of URL parameters.
    ///
    /// Parameters that cannot produce a query go straight to `Error`
    /// without any fetch.
    #[must_use]
    pub fn from_params(params: &InventoryParams, default_take: NonZeroU32) -> Self {
        match params.resolve(default_take) {
            Ok(query) => Self::Loading(query),
            Err(err) => Self::Error(err),
        }
    }

    /// Settle a fetch cycle with its outcome.
    ///
    /// The error value is discarded; callers log it before settling.
    #[must_use]
    pub fn settle<E>(query: InventoryQuery, outcome: Result<InventoryPage, E>) -> Self {
        match outcome {
            Ok(page) if page.is_empty() => Self::Empty,
            Ok(page) => Self::Populated(InventoryResults { query, page }),
            Err(_) => Self::Error(ViewError::Transport),
        }
    }

    /// Short state name, used in markup and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading(_) => "loading",
            Self::Error(_) => "error",
            Self::Empty => "empty",
            Self::Populated(_) => "populated",
        }
    }
}

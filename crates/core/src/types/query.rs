//! Typed inventory query derived from the viewer URL.
//!
//! [`InventoryQuery`] is the single source of truth for what the viewer
//! fetches. Navigation never edits the URL by hand: controls derive the next
//! query from the current one (`prev_page`, `next_page`, `with_sort`) and
//! serialize it with [`InventoryQuery::query_string`].

use std::num::NonZeroU32;

use serde::Deserialize;

use super::id::{UserId, UserRef};
use super::sort::SortBy;
use crate::view::ViewError;

/// Items per page when the URL does not say otherwise.
pub const DEFAULT_TAKE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(take) => take,
    None => panic!("default page size must be non-zero"),
};

/// Raw viewer query parameters, exactly as they appear in the URL.
///
/// Parsing is lenient: malformed numbers fall back to their defaults and an
/// unknown sort falls back to [`SortBy::Newest`]. Only a missing or sentinel
/// `userId` is an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryParams {
    pub user_id: Option<String>,
    pub skip: Option<String>,
    pub take: Option<String>,
    pub sort_by: Option<String>,
}

impl InventoryParams {
    /// Resolve into a typed query.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::NoIdentifier`] when `userId` is missing or blank,
    /// and [`ViewError::LookupNotFound`] / [`ViewError::LookupFailed`] when it
    /// holds one of the resolver's sentinel values.
    pub fn resolve(&self, default_take: NonZeroU32) -> Result<InventoryQuery, ViewError> {
        let user = self
            .user_id
            .as_deref()
            .and_then(UserRef::parse)
            .ok_or(ViewError::NoIdentifier)?;

        let user_id = match user {
            UserRef::Id(id) => id,
            UserRef::NotFound => return Err(ViewError::LookupNotFound),
            UserRef::Failed => return Err(ViewError::LookupFailed),
        };

        let skip = self
            .skip
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let take = self
            .take
            .as_deref()
            .and_then(|t| t.trim().parse::<NonZeroU32>().ok())
            .unwrap_or(default_take);

        Ok(InventoryQuery {
            user_id,
            skip,
            take,
            sort_by: SortBy::parse_or_default(self.sort_by.as_deref()),
        })
    }
}

/// What the viewer fetches: one page of one user's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InventoryQuery {
    pub user_id: UserId,
    pub skip: u32,
    pub take: NonZeroU32,
    pub sort_by: SortBy,
}

impl InventoryQuery {
    /// The first page for a freshly resolved user, sorted by the default order.
    #[must_use]
    pub fn first_page(user_id: UserId, take: NonZeroU32) -> Self {
        Self {
            user_id,
            skip: 0,
            take,
            sort_by: SortBy::default(),
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.skip > 0
    }

    #[must_use]
    pub fn has_next(&self, total_count: u64) -> bool {
        u64::from(self.skip) + u64::from(self.take.get()) < total_count
    }

    /// Query for the previous page. Never goes below zero.
    #[must_use]
    pub fn prev_page(&self) -> Self {
        Self {
            skip: self.skip.saturating_sub(self.take.get()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.take.get()),
            ..self.clone()
        }
    }

    /// Query for a different sort order, back on the first page.
    #[must_use]
    pub fn with_sort(&self, sort_by: SortBy) -> Self {
        Self {
            skip: 0,
            sort_by,
            ..self.clone()
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.skip / self.take.get() + 1
    }

    /// Parameters in the order the listing endpoint documents them.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("userId", self.user_id.to_string()),
            ("skip", self.skip.to_string()),
            ("take", self.take.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
        ]
    }

    /// URL-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query_pairs())
            .finish()
    }

    /// Address of the full viewer page for this query.
    #[must_use]
    pub fn page_href(&self) -> String {
        format!("{VIEWER_PATH}?{}", self.query_string())
    }

    /// Address of the results fragment for this query.
    #[must_use]
    pub fn results_href(&self) -> String {
        format!("{RESULTS_PATH}?{}", self.query_string())
    }
}

/// Path of the inventory viewer page.
pub const VIEWER_PATH: &str = "/inventory";

/// Path of the inventory results fragment.
pub const RESULTS_PATH: &str = "/inventory/results";

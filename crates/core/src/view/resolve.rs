//! Outcome of resolving a website name into a viewer address.

use std::num::NonZeroU32;

use crate::types::{InventoryQuery, UserId, UserRef, VIEWER_PATH};

/// Result of one business lookup, as far as navigation is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The lookup returned a user id.
    Found(UserId),
    /// The lookup succeeded without a user id.
    NotFound,
    /// The lookup request failed.
    Failed,
}

impl ResolveOutcome {
    /// Where the resolver sends the browser.
    ///
    /// A found user lands on the first page in the default sort order. The
    /// other outcomes carry their sentinel and nothing else.
    #[must_use]
    pub fn location(&self, take: NonZeroU32) -> String {
        match self {
            Self::Found(user_id) => InventoryQuery::first_page(user_id.clone(), take).page_href(),
            Self::NotFound => sentinel_location(&UserRef::NotFound),
            Self::Failed => sentinel_location(&UserRef::Failed),
        }
    }
}

fn sentinel_location(user_ref: &UserRef) -> String {
    format!("{VIEWER_PATH}?userId={}", user_ref.as_query_value())
}

/// Pick the website name to look up: path segment, then query parameter,
/// then `fallback`. Blank candidates are skipped.
#[must_use]
pub fn pick_website_name<'a>(
    path: Option<&'a str>,
    query: Option<&'a str>,
    fallback: &'a str,
) -> &'a str {
    [path, query]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or(fallback)
}

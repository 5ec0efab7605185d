//! Core types for the inventory storefront.
//!
//! This module provides type-safe wrappers for the inventory API's domain
//! concepts and the viewer's typed query.

pub mod business;
pub mod id;
pub mod mobile;
pub mod query;
pub mod sort;
pub mod status;
mod wire;

pub use business::{BusinessIdentity, DEFAULT_LOGO, UserLookup};
pub use id::{ERROR_SENTINEL, MobileId, NOT_FOUND_SENTINEL, UserId, UserRef};
pub use mobile::{InventoryPage, MobileItem, MobileMedia, is_web_url};
pub use query::{DEFAULT_TAKE, InventoryParams, InventoryQuery, RESULTS_PATH, VIEWER_PATH};
pub use sort::{SortBy, SortByError};
pub use status::{BadgeScheme, BadgeSchemeError, Condition, ProductStatus};

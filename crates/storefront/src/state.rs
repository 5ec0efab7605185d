//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::inventory::{IdentityCache, InventoryApiError, InventoryClient};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the inventory API client and the identity cache.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    inventory: InventoryClient,
    identities: IdentityCache,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory client cannot be built from the
    /// configured base URL.
    pub fn new(config: StorefrontConfig) -> Result<Self, InventoryApiError> {
        let inventory = InventoryClient::new(&config.inventory)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                inventory,
                identities: IdentityCache::new(),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the inventory API client.
    #[must_use]
    pub fn inventory(&self) -> &InventoryClient {
        &self.inner.inventory
    }

    /// Get a reference to the resolved-identity cache.
    #[must_use]
    pub fn identities(&self) -> &IdentityCache {
        &self.inner.identities
    }
}

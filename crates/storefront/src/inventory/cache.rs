//! Transient store for resolved business identities.
//!
//! The resolver hands the identity to the viewer across a redirect. Entries
//! expire after ten minutes; a miss only means the viewer renders without
//! the business header.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use qr_inventory_core::{BusinessIdentity, UserId};

const IDENTITY_TTL: Duration = Duration::from_secs(600);
const IDENTITY_CAPACITY: u64 = 10_000;

/// Business identities keyed by user id.
#[derive(Clone)]
pub struct IdentityCache {
    cache: Cache<UserId, Arc<BusinessIdentity>>,
}

impl IdentityCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(IDENTITY_TTL)
    }

    /// Cache with a custom time-to-live.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(IDENTITY_CAPACITY)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Remember `identity` under its own user id.
    pub async fn insert(&self, identity: BusinessIdentity) {
        self.cache
            .insert(identity.user_id.clone(), Arc::new(identity))
            .await;
    }

    pub async fn get(&self, user_id: &UserId) -> Option<Arc<BusinessIdentity>> {
        self.cache.get(user_id).await
    }
}

impl Default for IdentityCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn identity(id: &str) -> BusinessIdentity {
        BusinessIdentity {
            user_id: UserId::new(id).unwrap(),
            name: format!("Shop {id}"),
            address1: None,
            address2: None,
            state: None,
            country: None,
            mobile_number: None,
            logo: None,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let cache = IdentityCache::new();
        cache.insert(identity("42")).await;

        let hit = cache.get(&UserId::new("42").unwrap()).await.unwrap();
        assert_eq!(hit.name, "Shop 42");
        assert!(cache.get(&UserId::new("43").unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn test_entries_expire() {
        let cache = IdentityCache::with_ttl(Duration::from_millis(50));
        cache.insert(identity("7")).await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(cache.get(&UserId::new("7").unwrap()).await.is_none());
    }
}

use crate::models::CatalogSnapshot;
use crate::services::catalog::{CatalogClient, CatalogError};
use std::sync::Arc;
use std::time::Duration;

const SNAPSHOT_KEY: &str = "catalog:snapshot";

/// In-memory cache of the latest catalog snapshot
///
/// Snapshots expire after the configured TTL so catalog edits made in the
/// backend show up without a restart.
pub struct CatalogCache {
    snapshots: moka::future::Cache<String, Arc<CatalogSnapshot>>,
    ttl_secs: u64,
}

impl CatalogCache {
    /// Create a new catalog cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let snapshots = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            snapshots,
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Cached snapshot, if one is still live
    pub async fn get(&self) -> Option<Arc<CatalogSnapshot>> {
        self.snapshots.get(SNAPSHOT_KEY).await
    }

    /// Store a snapshot
    pub async fn set(&self, snapshot: CatalogSnapshot) -> Arc<CatalogSnapshot> {
        let snapshot = Arc::new(snapshot);
        self.snapshots
            .insert(SNAPSHOT_KEY.to_string(), snapshot.clone())
            .await;
        tracing::trace!("Cache set: {}", SNAPSHOT_KEY);
        snapshot
    }

    /// Drop the cached snapshot
    pub async fn invalidate(&self) {
        self.snapshots.invalidate(SNAPSHOT_KEY).await;
    }

    /// Cached snapshot, fetching from the backend on a miss
    pub async fn get_or_fetch(&self, client: &CatalogClient) -> Result<Arc<CatalogSnapshot>, CatalogError> {
        if let Some(snapshot) = self.get().await {
            tracing::trace!("Cache hit: {}", SNAPSHOT_KEY);
            return Ok(snapshot);
        }

        tracing::trace!("Cache miss: {}", SNAPSHOT_KEY);
        let snapshot = client.fetch_snapshot().await?;
        Ok(self.set(snapshot).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            services: vec![Service {
                id: "svc1".to_string(),
                name: "Fade Cut".to_string(),
                description: String::new(),
                duration_minutes: 30,
                price_cents: 2500,
            }],
            stylists: vec![],
        }
    }

    #[tokio::test]
    async fn test_set_get_invalidate() {
        let cache = CatalogCache::new(10, 60);
        assert!(cache.get().await.is_none());

        cache.set(snapshot()).await;
        let cached = cache.get().await.unwrap();
        assert_eq!(cached.services[0].id, "svc1");

        cache.invalidate().await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_hit_skips_backend() {
        let cache = CatalogCache::new(10, 60);
        cache.set(snapshot()).await;

        // Nothing listens here; a fetch would fail
        let client = CatalogClient::new("http://127.0.0.1:9".to_string(), None, 1).unwrap();
        let cached = cache.get_or_fetch(&client).await.unwrap();

        assert_eq!(cached.services.len(), 1);
    }
}

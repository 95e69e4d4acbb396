//! In-memory snapshot cache with a 24-hour freshness window

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::fetch::fetch_snapshot;
use crate::registry::source::MetadataSource;
use crate::registry::types::PackageRecord;

/// One complete refresh cycle's result plus its freshness bookkeeping.
///
/// Replaced wholesale on every refresh; a snapshot never mixes records
/// from two cycles.
struct CacheEntry {
    snapshot: Vec<PackageRecord>,
    expires_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
}

/// Shared cache over the configured package list.
///
/// Readers hitting a fresh snapshot proceed concurrently under the read
/// lock. A refresh (stale read or explicit) holds the write lock for the
/// whole fetch-and-swap, so refreshes are serialized with each other and
/// readers never observe a partial update.
pub struct PackageCache {
    source: Box<dyn MetadataSource>,
    specs: Vec<String>,
    ttl: Duration,
    state: RwLock<Option<CacheEntry>>,
}

impl PackageCache {
    pub fn new(source: Box<dyn MetadataSource>, specs: Vec<String>, ttl: Duration) -> Self {
        Self {
            source,
            specs,
            ttl,
            state: RwLock::new(None),
        }
    }

    /// Returns the cached snapshot when it is still fresh, refreshing it
    /// first otherwise.
    pub async fn read(&self) -> Vec<PackageRecord> {
        self.read_at(Utc::now()).await
    }

    /// Unconditionally refreshes the snapshot and returns it.
    pub async fn force_refresh(&self) -> Vec<PackageRecord> {
        self.refresh_at(Utc::now()).await
    }

    /// Timestamp of the most recent refresh, `None` before the first.
    /// Updated on every refresh, even one that produced an empty snapshot.
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state
            .read()
            .await
            .as_ref()
            .map(|entry| entry.last_updated)
    }

    async fn read_at(&self, now: DateTime<Utc>) -> Vec<PackageRecord> {
        {
            let state = self.state.read().await;
            if let Some(entry) = state.as_ref() {
                if now < entry.expires_at {
                    return entry.snapshot.clone();
                }
            }
        }

        let mut state = self.state.write().await;
        // Another reader may have refreshed while we waited for the write
        // lock; only the first stale hit fetches.
        if let Some(entry) = state.as_ref() {
            if now < entry.expires_at {
                return entry.snapshot.clone();
            }
        }
        self.refresh_locked(&mut state, now).await
    }

    async fn refresh_at(&self, now: DateTime<Utc>) -> Vec<PackageRecord> {
        let mut state = self.state.write().await;
        self.refresh_locked(&mut state, now).await
    }

    async fn refresh_locked(
        &self,
        state: &mut Option<CacheEntry>,
        now: DateTime<Utc>,
    ) -> Vec<PackageRecord> {
        debug!("Refreshing package snapshot");
        let snapshot = fetch_snapshot(self.source.as_ref(), &self.specs).await;
        info!(
            "Cached {} packages until {}",
            snapshot.len(),
            now + self.ttl
        );

        *state = Some(CacheEntry {
            snapshot: snapshot.clone(),
            expires_at: now + self.ttl,
            last_updated: now,
        });
        snapshot
    }
}

//! Shared Cache Handle
//!
//! The public, clonable cache type: a store behind a lock plus the reaper
//! task bound to it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::{spawn_reaper_task, ReaperGuard};

// == Expiring Cache ==
/// A concurrency-safe, time-bounded key/value cache.
///
/// Entries expire a fixed TTL after insertion and are removed either lazily
/// by [`get`](ExpiringCache::get) or proactively by a background reaper that
/// sweeps the store once per TTL interval. Typical use is memoizing fetched
/// HTTP responses, with the request URL as key and the raw body as value:
/// check `get` before issuing a request, `add` after a successful response.
///
/// Cloning is cheap and clones share the same storage and reaper. The reaper
/// is aborted when the last clone is dropped, or earlier via
/// [`shutdown`](ExpiringCache::shutdown).
///
/// All operations serialize on a single lock over the whole map, so every
/// `add`, `get`, and sweep observes a consistent view; no operation holds
/// the lock across I/O.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    /// Shared store guarded by a single lock
    store: Arc<RwLock<CacheStore>>,
    /// Aborts the reaper task when the last handle drops
    reaper: Arc<ReaperGuard>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates a cache with the given TTL and starts its reaper task.
    ///
    /// Must be called from within a Tokio runtime. Fails with
    /// [`CacheError::InvalidTtl`](crate::error::CacheError::InvalidTtl) if
    /// `ttl` is zero.
    pub fn new(ttl: Duration) -> Result<Self> {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)?));
        let handle = spawn_reaper_task(Arc::clone(&store), ttl);

        Ok(Self {
            store,
            reaper: Arc::new(ReaperGuard::new(handle)),
        })
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.ttl)
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with the current timestamp.
    pub async fn add(&self, key: String, payload: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key, payload);
    }

    // == Get ==
    /// Retrieves a copy of the payload for `key`, if present and fresh.
    ///
    /// Takes the write half of the lock because an expired entry is removed
    /// as a side effect of the lookup.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Inspection ==
    /// Checks whether `key` is currently present in storage, expired or not.
    pub async fn contains_key(&self, key: &str) -> bool {
        let store = self.store.read().await;
        store.contains_key(key)
    }

    /// Returns the current number of entries in storage.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.is_empty()
    }

    /// Returns a snapshot of the activity counters.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }

    // == Shutdown ==
    /// Stops the reaper task immediately.
    ///
    /// Entries already in storage remain readable; without the sweep,
    /// expired write-only keys linger until a `get` lazily evicts them.
    pub fn shutdown(&self) {
        self.reaper.abort();
    }
}

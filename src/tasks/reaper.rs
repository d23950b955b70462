//! Reaper Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps expired entries out of the store.
///
/// The task runs in an infinite loop: it sleeps one full TTL interval, then
/// acquires the write lock and purges every entry whose age exceeds the TTL.
/// The first sweep therefore happens one interval after spawn, and sweeps
/// never run more frequently than the TTL. The sweep exists to bound memory
/// growth from write-only keys, which the lazy eviction in `get` never
/// visits.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `ttl` - The store's TTL, used as the sweep interval
///
/// # Returns
/// A JoinHandle for the spawned task. Wrap it in a [`ReaperGuard`] (as
/// [`ExpiringCache`](crate::cache::ExpiringCache) does) so the loop is
/// aborted when the cache is dropped.
pub fn spawn_reaper_task(store: Arc<RwLock<CacheStore>>, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting reaper task with sweep interval of {:?}", ttl);

        loop {
            // Sleep for one full TTL interval
            tokio::time::sleep(ttl).await;

            // Acquire write lock and purge expired entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.purge_expired()
            };

            if removed > 0 {
                info!("Reaper sweep: removed {} expired entries", removed);
            } else {
                debug!("Reaper sweep: no expired entries found");
            }
        }
    })
}

// == Reaper Guard ==
/// Owns a reaper task's JoinHandle and aborts it on drop.
///
/// The reaper loop never exits on its own; the guard ties its lifetime to
/// the owning cache so teardown is deterministic instead of relying on
/// process exit.
#[derive(Debug)]
pub struct ReaperGuard {
    handle: JoinHandle<()>,
}

impl ReaperGuard {
    /// Wraps a reaper JoinHandle.
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }

    /// Stops the reaper task immediately.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Returns true once the reaper task has terminated.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ReaperGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reaper_task_removes_expired_entries() {
        let store = Arc::new(RwLock::new(
            CacheStore::new(Duration::from_millis(40)).unwrap(),
        ));

        // Add an entry that will expire before the second sweep
        {
            let mut store_guard = store.write().await;
            store_guard.add("expire_soon".to_string(), b"value".to_vec());
        }

        let handle = spawn_reaper_task(Arc::clone(&store), Duration::from_millis(40));

        // First sweep at ~40ms may still see the entry as fresh; by the
        // second sweep its age exceeds the TTL
        tokio::time::sleep(Duration::from_millis(120)).await;

        {
            let store_guard = store.read().await;
            assert!(
                !store_guard.contains_key("expire_soon"),
                "Expired entry should have been swept"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_task_preserves_fresh_entries() {
        let store = Arc::new(RwLock::new(
            CacheStore::new(Duration::from_millis(150)).unwrap(),
        ));

        let handle = spawn_reaper_task(Arc::clone(&store), Duration::from_millis(150));

        // Insert shortly before the first sweep so the entry is well within
        // its TTL when the sweep runs
        tokio::time::sleep(Duration::from_millis(100)).await;
        {
            let mut store_guard = store.write().await;
            store_guard.add("fresh".to_string(), b"value".to_vec());
        }

        // Let the first sweep pass
        tokio::time::sleep(Duration::from_millis(80)).await;

        {
            let store_guard = store.read().await;
            assert!(
                store_guard.contains_key("fresh"),
                "Fresh entry should survive the sweep"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_reaper_task_can_be_aborted() {
        let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(1)).unwrap()));

        let handle = spawn_reaper_task(store, Duration::from_secs(1));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }

    #[tokio::test]
    async fn test_reaper_guard_abort() {
        let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(1)).unwrap()));

        let guard = ReaperGuard::new(spawn_reaper_task(store, Duration::from_secs(1)));
        assert!(!guard.is_finished());

        guard.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(guard.is_finished(), "Guard abort should stop the task");
    }
}

//! Cache Store Module
//!
//! The synchronous cache engine: a HashMap of entries with a fixed TTL,
//! lazy eviction on read, and a purge pass for the background reaper.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key/value storage with a single fixed TTL applied to every entry.
///
/// The store is purely synchronous; callers serialize access through the
/// lock held by [`ExpiringCache`](crate::cache::ExpiringCache). Payloads
/// handed out by `get` are clones, never references into the map.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Fixed time-to-live applied to every entry
    ttl: Duration,
    /// Activity counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new empty CacheStore with the given TTL.
    ///
    /// Fails fast on a zero TTL: a zero-length period would expire every
    /// entry immediately and make the reaper spin without sleeping.
    pub fn new(ttl: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl(ttl));
        }

        Ok(Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        })
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key` with the current timestamp.
    ///
    /// Unconditional: always succeeds, no constraints on key or payload
    /// content (empty allowed). Overwriting resets the entry's age, so a key
    /// re-added just before expiry gets a full TTL again.
    pub fn add(&mut self, key: String, payload: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(payload));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a copy of the payload for `key`, if present and fresh.
    ///
    /// An expired entry is removed as a side effect of the lookup (lazy
    /// eviction) and reported as a miss, so callers never observe a payload
    /// whose age exceeds the TTL even if the reaper has not run yet. Absent
    /// and expired keys are indistinguishable to the caller.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(self.ttl) {
                self.entries.remove(key);
                self.stats.record_expired();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let payload = entry.payload.clone();
            self.stats.record_hit();
            Some(payload)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Purge Expired ==
    /// Removes every entry whose age exceeds the TTL at this instant.
    ///
    /// Called by the background reaper; covers write-only keys that the lazy
    /// eviction path in `get` never visits. Returns the number removed.
    pub fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.ttl))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
            self.stats.record_expired();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Contains Key ==
    /// Checks whether `key` is currently present in storage.
    ///
    /// Side-effect free: no expiry check, no stats update. An
    /// expired-but-unswept entry still counts as present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == TTL ==
    /// Returns the fixed TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of the current activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in storage.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

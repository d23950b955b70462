//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: an opaque payload stamped with its creation time.
///
/// Entries are immutable once inserted; re-inserting a key replaces the
/// whole entry, payload and timestamp both.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload (opaque bytes, may be empty)
    pub payload: Vec<u8>,
    /// When the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is expired only when its age strictly
    /// exceeds the TTL. An entry aged exactly `ttl` is still fresh.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}

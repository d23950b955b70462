//! Cache Module
//!
//! Provides in-memory caching with fixed-TTL expiry, lazy eviction on read,
//! and a background reaper sweep.

mod entry;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use shared::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;

//! Fetch Cache - a concurrency-safe, time-bounded in-memory cache
//!
//! Entries expire a fixed TTL after insertion and are removed either lazily
//! on read or by a background reaper that sweeps the store once per TTL
//! interval. Built for memoizing fetched HTTP responses (URL as key, raw
//! body as value), but keys and payloads are opaque.
//!
//! # Example
//! ```no_run
//! use std::time::Duration;
//! use fetch_cache::ExpiringCache;
//!
//! # async fn example() -> fetch_cache::Result<()> {
//! let cache = ExpiringCache::new(Duration::from_secs(300))?;
//!
//! cache.add("https://example.com".to_string(), b"body".to_vec()).await;
//! if let Some(body) = cache.get("https://example.com").await {
//!     // fresh hit, skip the network round trip
//!     assert_eq!(body, b"body");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheEntry, CacheStats, CacheStore, ExpiringCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::{spawn_reaper_task, ReaperGuard};

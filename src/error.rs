//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// The only failure mode at this layer is misuse at construction time: a
/// lookup miss (absent or expired key) is routine behavior and is signaled
/// with `Option`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// TTL passed to the constructor was not strictly positive
    #[error("invalid TTL {0:?}: must be greater than zero")]
    InvalidTtl(Duration),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

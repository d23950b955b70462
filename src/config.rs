//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default TTL in seconds, matching the refresh window of the upstream API
/// data the cache was built for.
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Cache configuration parameters.
///
/// Values can be supplied via environment variables with sensible defaults.
/// The TTL is validated when the cache is constructed, not here.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Fixed time-to-live applied to every entry; also the reaper's sweep
    /// interval
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TTL_SECS),
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_config_from_env_default() {
        env::remove_var("CACHE_TTL_SECS");

        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_config_from_env_ignores_garbage() {
        env::set_var("CACHE_TTL_SECS", "not-a-number");

        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, Duration::from_secs(300));

        env::remove_var("CACHE_TTL_SECS");
    }
}

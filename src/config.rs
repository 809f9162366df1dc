//! Configuration Module
//!
//! Reads the cache entry limit from the environment.

use std::env;

use tracing::warn;

use crate::error::{CacheError, Result};

/// Environment variable holding the cache entry limit.
pub const CACHE_LIMIT_ENV: &str = "OBJECT_CACHE_LIMIT";

/// Cache configuration parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub cache_entry_limit: usize,
}

impl Config {
    /// Creates a Config with an explicit entry limit.
    pub fn with_limit(cache_entry_limit: usize) -> Self {
        Self { cache_entry_limit }
    }

    /// Creates a new Config by loading the limit from the environment.
    ///
    /// # Environment Variables
    /// - `OBJECT_CACHE_LIMIT` - Maximum cache entries (default: 0)
    ///
    /// A missing or unparsable value yields a limit of 0 rather than an error.
    pub fn from_env() -> Self {
        let cache_entry_limit = match env::var(CACHE_LIMIT_ENV) {
            Ok(raw) => Self::parse_limit(&raw).unwrap_or_else(|err| {
                warn!("{}, falling back to 0", err);
                0
            }),
            Err(_) => {
                warn!("{} is not set, cache entry limit is 0", CACHE_LIMIT_ENV);
                0
            }
        };

        Self { cache_entry_limit }
    }

    /// Parses a raw limit value.
    pub fn parse_limit(raw: &str) -> Result<usize> {
        raw.trim()
            .parse()
            .map_err(|_| CacheError::InvalidLimit(raw.to_string()))
    }
}

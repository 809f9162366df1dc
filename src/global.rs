//! Process-wide Cache Instance
//!
//! The single shared `ObjectCache`, created lazily and exactly once.

use std::sync::OnceLock;

use tracing::info;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{CacheKey, CacheValue};

/// Cache type behind the process-wide instance.
pub type ObjectCache = CacheStore<CacheKey, CacheValue>;

static INSTANCE: OnceLock<ObjectCache> = OnceLock::new();

/// Returns the process-wide cache, creating it on first access.
///
/// The capacity is read once from `OBJECT_CACHE_LIMIT`. Concurrent first
/// callers all receive the same instance.
pub fn instance() -> &'static ObjectCache {
    INSTANCE.get_or_init(|| build(Config::from_env()))
}

/// Creates the process-wide cache from an explicit configuration.
///
/// Fails with [`CacheError::AlreadyInitialized`] if the instance already
/// exists, whether created by `instance()` or an earlier `try_init`.
pub fn try_init(config: Config) -> Result<&'static ObjectCache> {
    let mut created = false;
    let cache = INSTANCE.get_or_init(|| {
        created = true;
        build(config)
    });

    if created {
        Ok(cache)
    } else {
        Err(CacheError::AlreadyInitialized)
    }
}

fn build(config: Config) -> ObjectCache {
    info!(
        capacity = config.cache_entry_limit,
        "Object cache instance created"
    );
    CacheStore::new(config.cache_entry_limit)
}

//! Object Cache - a process-wide bounded concurrent cache
//!
//! Holds at most a configured number of entries and evicts the entry with
//! the oldest write when a new key needs room.

pub mod cache;
pub mod config;
pub mod error;
pub mod global;
pub mod models;

pub use cache::{
    CacheEntry, CacheStats, CacheStore, EvictionListener, EvictionNotice, LogListener,
    EVICTION_REASON,
};
pub use config::Config;
pub use error::{CacheError, Result};
pub use global::{instance, try_init, ObjectCache};
pub use models::{CacheKey, CacheValue};

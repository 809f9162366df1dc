//! Cache Module
//!
//! Provides a bounded concurrent cache with oldest-write eviction.

mod entry;
mod eviction;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use eviction::{EvictionListener, EvictionNotice, LogListener, EVICTION_REASON};
pub use stats::CacheStats;
pub use store::CacheStore;

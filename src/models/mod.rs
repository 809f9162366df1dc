//! Models Module
//!
//! Key and value types stored by the process-wide object cache.

mod key;
mod value;

pub use key::CacheKey;
pub use value::CacheValue;

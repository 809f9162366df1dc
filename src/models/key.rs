//! Cache key type for the process-wide cache

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key of an object cache entry.
///
/// Keys are compared and hashed by variant and content, so `Text("1")` and
/// `Integer(1)` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum CacheKey {
    /// UTF-8 string key
    Text(String),
    /// Signed integer key
    Integer(i64),
    /// Raw byte key
    Bytes(Vec<u8>),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Text(text) => write!(f, "{}", text),
            CacheKey::Integer(n) => write!(f, "{}", n),
            CacheKey::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<&str> for CacheKey {
    fn from(key: &str) -> Self {
        CacheKey::Text(key.to_string())
    }
}

impl From<String> for CacheKey {
    fn from(key: String) -> Self {
        CacheKey::Text(key)
    }
}

impl From<i64> for CacheKey {
    fn from(key: i64) -> Self {
        CacheKey::Integer(key)
    }
}

impl From<Vec<u8>> for CacheKey {
    fn from(key: Vec<u8>) -> Self {
        CacheKey::Bytes(key)
    }
}

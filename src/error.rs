//! Error types for the object cache
//!
//! Cache operations themselves never fail; these cover configuration and
//! global instance setup.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the object cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Configured entry limit is not a non-negative integer
    #[error("Invalid cache entry limit: {0}")]
    InvalidLimit(String),

    /// The process-wide cache was already created
    #[error("Object cache is already initialized")]
    AlreadyInitialized,
}

// == Result Type Alias ==
/// Convenience Result type for the object cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CacheError::InvalidLimit("abc".to_string());
        assert_eq!(err.to_string(), "Invalid cache entry limit: abc");
        assert_eq!(
            CacheError::AlreadyInitialized.to_string(),
            "Object cache is already initialized"
        );
    }
}

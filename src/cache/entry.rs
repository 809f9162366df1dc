//! Cache Entry Module
//!
//! Defines the timestamped wrapper stored for every key.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Entry ==
/// A stored value together with the time it was last written.
///
/// Entries are immutable once built. An update replaces the whole entry,
/// so readers holding an `Arc<CacheEntry<V>>` always see a consistent pair.
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry<V> {
    /// The stored value
    value: V,
    /// Time of the write that produced this entry
    last_updated: DateTime<Utc>,
    /// Write order assigned by the owning cache, breaks timestamp ties
    #[serde(skip)]
    pub(crate) revision: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self::with_timestamp(value, Utc::now())
    }

    /// Creates an entry with a caller-supplied write time.
    pub fn with_timestamp(value: V, last_updated: DateTime<Utc>) -> Self {
        Self {
            value,
            last_updated,
            revision: 0,
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the time this entry was written.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Consumes the entry, returning the value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Eviction ordering key: oldest write first, earliest revision on ties.
    pub(crate) fn age_key(&self) -> (DateTime<Utc>, u64) {
        (self.last_updated, self.revision)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_entry_new_stamps_now() {
        let before = Utc::now();
        let entry = CacheEntry::new("test_value");
        let after = Utc::now();

        assert_eq!(*entry.value(), "test_value");
        assert!(entry.last_updated() >= before);
        assert!(entry.last_updated() <= after);
    }

    #[test]
    fn test_entry_with_timestamp() {
        let ts = Utc::now() - Duration::minutes(5);
        let entry = CacheEntry::with_timestamp(7_i64, ts);

        assert_eq!(entry.last_updated(), ts);
        assert_eq!(entry.into_value(), 7);
    }

    #[test]
    fn test_age_key_breaks_ties_by_revision() {
        let ts = Utc::now();
        let mut first = CacheEntry::with_timestamp("a", ts);
        let mut second = CacheEntry::with_timestamp("b", ts);
        first.revision = 1;
        second.revision = 2;

        assert!(first.age_key() < second.age_key());
    }

    #[test]
    fn test_entry_serializes_without_revision() {
        let entry = CacheEntry::new("payload");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["value"], "payload");
        assert!(json.get("last_updated").is_some());
        assert!(json.get("revision").is_none());
    }
}

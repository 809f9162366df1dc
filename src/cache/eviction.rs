//! Eviction Module
//!
//! Victim selection for the oldest-write policy and the notification sink
//! raised when an entry is evicted to make room.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use crate::cache::CacheEntry;

/// Reason attached to every capacity-driven eviction.
pub const EVICTION_REASON: &str = "Object Cache Eviction";

// == Eviction Notice ==
/// Describes a single capacity-driven eviction.
#[derive(Debug)]
pub struct EvictionNotice<'a, K, V> {
    /// Key whose insertion required the eviction
    pub evicted_for: &'a K,
    /// Value being inserted under `evicted_for`
    pub value: &'a V,
    /// Key that was removed
    pub evicted_key: &'a K,
    /// Human-readable reason
    pub reason: &'static str,
}

// == Eviction Listener ==
/// Sink notified synchronously on the upserting thread after each eviction.
///
/// Implemented for any `Fn(&EvictionNotice<K, V>)` closure. Listeners run
/// after the store's admission lock is released and may use the same store.
pub trait EvictionListener<K, V>: Send + Sync {
    fn on_eviction(&self, notice: &EvictionNotice<'_, K, V>);
}

impl<K, V, F> EvictionListener<K, V> for F
where
    F: Fn(&EvictionNotice<'_, K, V>) + Send + Sync,
{
    fn on_eviction(&self, notice: &EvictionNotice<'_, K, V>) {
        self(notice)
    }
}

/// Default listener, reports evictions through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

impl<K: Debug, V: Debug> EvictionListener<K, V> for LogListener {
    fn on_eviction(&self, notice: &EvictionNotice<'_, K, V>) {
        info!(
            evicted_key = ?notice.evicted_key,
            evicted_for = ?notice.evicted_for,
            value = ?notice.value,
            "Notification sent: {}",
            notice.reason
        );
    }
}

// == Victim Selection ==
/// Scans every entry and returns the key and revision of the oldest write.
///
/// Ordering is by `last_updated`, then by revision, so the result is
/// deterministic even when timestamps collide. Returns None when empty.
pub(crate) fn find_victim<K, V>(entries: &DashMap<K, Arc<CacheEntry<V>>>) -> Option<(K, u64)>
where
    K: Eq + Hash + Clone,
{
    entries
        .iter()
        .min_by_key(|item| item.value().age_key())
        .map(|item| (item.key().clone(), item.value().revision))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::sync::Mutex;

    fn stored(value: &'static str, age_secs: i64, revision: u64) -> Arc<CacheEntry<&'static str>> {
        let written = Utc::now() - Duration::seconds(age_secs);
        let mut entry = CacheEntry::with_timestamp(value, written);
        entry.revision = revision;
        Arc::new(entry)
    }

    #[test]
    fn test_find_victim_empty() {
        let entries: DashMap<String, Arc<CacheEntry<&str>>> = DashMap::new();
        assert!(find_victim(&entries).is_none());
    }

    #[test]
    fn test_find_victim_picks_oldest_timestamp() {
        let entries = DashMap::new();
        entries.insert("a", stored("a", 10, 1));
        entries.insert("b", stored("b", 30, 2));
        entries.insert("c", stored("c", 20, 3));

        assert_eq!(find_victim(&entries), Some(("b", 2)));
    }

    #[test]
    fn test_find_victim_tie_uses_revision() {
        let ts = Utc::now();
        let entries = DashMap::new();
        for (key, revision) in [("x", 9), ("y", 4), ("z", 6)] {
            let mut entry = CacheEntry::with_timestamp(key, ts);
            entry.revision = revision;
            entries.insert(key, Arc::new(entry));
        }

        assert_eq!(find_victim(&entries), Some(("y", 4)));
    }

    #[test]
    fn test_closure_listener_receives_notice() {
        let seen = Mutex::new(Vec::new());
        let listener = |notice: &EvictionNotice<'_, String, i32>| {
            seen.lock().unwrap().push((
                notice.evicted_key.clone(),
                notice.evicted_for.clone(),
                *notice.value,
            ));
        };

        let old_key = "old".to_string();
        let new_key = "new".to_string();
        listener.on_eviction(&EvictionNotice {
            evicted_for: &new_key,
            value: &5,
            evicted_key: &old_key,
            reason: EVICTION_REASON,
        });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("old".to_string(), "new".to_string(), 5)]
        );
    }
}

//! Cache Store Module
//!
//! Main cache engine: a sharded concurrent map bounded by an entry count,
//! evicting the oldest write when a new key would exceed the bound.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;

use crate::cache::eviction::{
    self, EvictionListener, EvictionNotice, LogListener, EVICTION_REASON,
};
use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Thread-safe key/value store holding at most `capacity` entries.
///
/// Reads and overwrites of existing keys go straight to the map shards.
/// Inserting a new key takes the admission lock, so the size check, the
/// eviction and the insert cannot interleave with another new-key insert.
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: DashMap<K, Arc<CacheEntry<V>>>,
    /// Serializes operations that can grow the map
    admission: Mutex<()>,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Source of write revisions
    next_revision: AtomicU64,
    /// Eviction sink
    listener: Box<dyn EvictionListener<K, V>>,
    /// Performance statistics
    stats: StatsRecorder,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Debug + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a store that reports evictions through `tracing`.
    pub fn new(capacity: usize) -> Self {
        Self::with_listener(capacity, LogListener)
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Send + Sync,
{
    /// Creates a store with a custom eviction listener.
    pub fn with_listener<L>(capacity: usize, listener: L) -> Self
    where
        L: EvictionListener<K, V> + 'static,
    {
        Self {
            entries: DashMap::new(),
            admission: Mutex::new(()),
            capacity,
            next_revision: AtomicU64::new(0),
            listener: Box::new(listener),
            stats: StatsRecorder::default(),
        }
    }

    // == Upsert ==
    /// Inserts or overwrites `key`, stamping the entry with the current time.
    ///
    /// Returns false when the key could not be inserted: either another
    /// writer inserted it first, or the capacity is 0.
    pub fn upsert(&self, key: K, value: V) -> bool {
        self.upsert_entry(key, CacheEntry::new(value))
    }

    /// Inserts or overwrites `key` with a prebuilt entry, keeping its timestamp.
    ///
    /// If the key is new and the store is full, the entry with the oldest
    /// `last_updated` is evicted first. The listener is notified once the
    /// admission lock is released, so it may call back into this store.
    pub fn upsert_entry(&self, key: K, mut entry: CacheEntry<V>) -> bool {
        entry.revision = self.next_revision.fetch_add(1, Ordering::Relaxed);
        let entry = Arc::new(entry);

        // Overwrite in place, size unchanged
        if let Some(mut slot) = self.entries.get_mut(&key) {
            *slot = entry;
            return true;
        }

        let evicted;
        let inserted = {
            let _admission = self.admission.lock();

            if self.entries.contains_key(&key) {
                return self.lost_race();
            }

            evicted = self.make_room();

            if self.entries.len() >= self.capacity {
                debug!(capacity = self.capacity, "No room for new entry");
                false
            } else {
                match self.entries.entry(key.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert(Arc::clone(&entry));
                        true
                    }
                    Entry::Occupied(_) => self.lost_race(),
                }
            }
        };

        for evicted_key in &evicted {
            self.listener.on_eviction(&EvictionNotice {
                evicted_for: &key,
                value: entry.value(),
                evicted_key,
                reason: EVICTION_REASON,
            });
        }

        inserted
    }

    /// Evicts oldest entries until a new key fits, returning the evicted keys.
    ///
    /// A victim that was removed or rewritten after the scan is left alone
    /// and the scan repeats against the current contents.
    fn make_room(&self) -> Vec<K> {
        let mut evicted = Vec::new();
        while self.entries.len() >= self.capacity {
            let Some((victim, revision)) = eviction::find_victim(&self.entries) else {
                break;
            };

            match self.evict_victim(&victim, revision) {
                Some(evicted_key) => evicted.push(evicted_key),
                None => debug!("Eviction victim changed concurrently, rescanning"),
            }
        }
        evicted
    }

    /// Removes `victim` only if it still holds the scanned revision.
    fn evict_victim(&self, victim: &K, revision: u64) -> Option<K> {
        let (evicted_key, _) = self
            .entries
            .remove_if(victim, |_, current| current.revision == revision)?;
        self.stats.record_eviction();
        Some(evicted_key)
    }

    fn lost_race(&self) -> bool {
        self.stats.record_insert_race();
        debug!("Key inserted concurrently, upsert not applied");
        false
    }

    // == Get ==
    /// Returns the current entry for `key`.
    ///
    /// Reads never change an entry's eviction order.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<CacheEntry<V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Remove ==
    /// Removes `key` and returns its entry. Does not notify the listener.
    pub fn remove<Q>(&self, key: &Q) -> Option<Arc<CacheEntry<V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key).map(|(_, entry)| entry)
    }

    // == Clear ==
    /// Removes every entry. Does not notify the listener.
    ///
    /// Every shard is write-locked before any is emptied, so concurrent
    /// readers see either the full contents or nothing.
    pub fn clear(&self) {
        let _admission = self.admission.lock();
        let mut shards: Vec<_> = self
            .entries
            .shards()
            .iter()
            .map(|shard| shard.write())
            .collect();
        for shard in shards.iter_mut() {
            shard.clear();
        }
        drop(shards);
        debug!("Cache cleared");
    }

    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.entries.len())
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

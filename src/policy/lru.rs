//! # Least Recently Used (LRU) Cache
//!
//! Fixed-capacity key → value cache that evicts the least recently used entry
//! when a new key arrives at a full cache. `get` and `put` are O(1) expected.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                           LruCache<K, V>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  KeyIndex<K>  (FxHashMap<K, SlotId>)                         │   │
//!   │   │                                                              │   │
//!   │   │   key_a ─────────────────────┐                               │   │
//!   │   │   key_b ───────────────┐     │                               │   │
//!   │   │   key_c ─────────┐     │     │                               │   │
//!   │   └──────────────────┼─────┼─────┼───────────────────────────────┘   │
//!   │                      │     │     │    handles only, no ownership     │
//!   │   ┌──────────────────┼─────┼─────┼───────────────────────────────┐   │
//!   │   │  RecencyList<Record<K, V>>   ▼                               │   │
//!   │   │                  ▼     ▼                                     │   │
//!   │   │   HEAD ──► [key_a] ◄──► [key_b] ◄──► [key_c] ◄── TAIL        │   │
//!   │   │            MRU                        LRU                    │   │
//!   │   │                                                              │   │
//!   │   │  Records live in a SlotArena owned by the list.              │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   PUT new key (cache full, capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════════
//!     Before:  HEAD ──► [A] ◄──► [B] ◄──► [C] ◄── TAIL
//!
//!     put(D):
//!       1. D not in index
//!       2. len == capacity: evict [C] (tail-adjacent), remove C from index
//!       3. insert [D] after HEAD, map D → slot
//!
//!     After:   HEAD ──► [D] ◄──► [A] ◄──► [B] ◄── TAIL
//!
//!   GET existing key
//!   ═══════════════════════════════════════════════════════════════════════
//!     Before:  HEAD ──► [A] ◄──► [B] ◄──► [C] ◄── TAIL
//!
//!     get(B): index lookup, move [B] after HEAD, clone value out
//!
//!     After:   HEAD ──► [B] ◄──► [A] ◄──► [C] ◄── TAIL
//!
//!   PUT existing key
//!   ═══════════════════════════════════════════════════════════════════════
//!     value replaced in place, entry moved after HEAD, len unchanged
//! ```
//!
//! ## Methods
//!
//! | Method             | Complexity | Description                                |
//! |--------------------|------------|--------------------------------------------|
//! | `new(capacity)`    | O(1)       | Validated constructor, rejects capacity 0  |
//! | `from_nonzero(n)`  | O(1)       | Infallible constructor                     |
//! | `put(k, v)`        | O(1)*      | Insert or update, may evict LRU            |
//! | `get(&k)`          | O(1)*      | Clone value out, moves to MRU              |
//! | `peek(&k)`         | O(1)*      | Borrow value, order unchanged              |
//! | `touch(&k)`        | O(1)*      | Move to MRU without reading                |
//! | `peek_lru()`       | O(1)       | Next eviction victim                       |
//! | `recency_rank(&k)` | O(n)       | Position in recency order (0 = MRU)        |
//! | `iter()`           | O(n)       | MRU → LRU traversal, order unchanged       |
//! | `clear()`          | O(n)       | Drop every entry                           |
//!
//! `*` amortized / expected, dominated by the hash lookup.
//!
//! ## Misses
//!
//! A miss is `None`. No key or value is reserved as a "not found" marker and
//! the list sentinels are a separate link variant, so caching `-1` (or any
//! other value) is indistinguishable from caching anything else.
//!
//! ## Thread Safety
//!
//! `LruCache` is single-threaded: every recency-changing call takes
//! `&mut self`. It is `Send` when `K` and `V` are, so it can be moved behind a
//! single `Mutex` when shared access is needed. No locking is done internally.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put(1, "a");
//! cache.put(2, "b");
//! assert_eq!(cache.get(&1), Some("a")); // 1 is now most recent
//!
//! cache.put(3, "c"); // evicts 2
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&1), Some("a"));
//! assert_eq!(cache.get(&3), Some("c"));
//! ```

use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::builder::LruCacheBuilder;
use crate::ds::recency_list::RecencyList;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::store::key_index::KeyIndex;
use crate::traits::{CoreCache, LruCacheTrait};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Payload stored in the recency list. The key is kept so an evicted entry
/// can be removed from the index.
#[derive(Debug)]
struct Record<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity LRU cache.
///
/// Composes a [`KeyIndex`] (key → handle) with a [`RecencyList`] that owns
/// the entries. Capacity is a [`NonZeroUsize`], so a constructed cache can
/// always evict before inserting.
pub struct LruCache<K, V> {
    index: KeyIndex<K>,
    list: RecencyList<Record<K, V>>,
    capacity: NonZeroUsize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(LruCache::<u32, String>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| ConfigError::new("cache capacity must be greater than zero"))?;
        Ok(Self::from_nonzero(capacity))
    }

    /// Creates a cache from an already validated capacity.
    pub fn from_nonzero(capacity: NonZeroUsize) -> Self {
        Self::with_layout(capacity, true)
    }

    /// Returns a builder for configuring a cache.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let cache = LruCache::<u64, u64>::builder(8).prealloc(false).try_build::<u64, u64>();
    /// assert!(cache.is_ok());
    /// ```
    pub fn builder(capacity: usize) -> LruCacheBuilder {
        LruCacheBuilder::new(capacity)
    }

    pub(crate) fn with_layout(capacity: NonZeroUsize, prealloc: bool) -> Self {
        let reserve = if prealloc { capacity.get() } else { 0 };
        debug!(capacity = capacity.get(), prealloc, "creating lru cache");
        Self {
            index: KeyIndex::with_capacity(reserve),
            list: RecencyList::with_capacity(reserve),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Returns a clone of the value for `key` and marks it most recently used.
    ///
    /// Returns `None` if the key is not cached.
    pub fn get(&mut self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.promote(key).cloned()
    }

    /// Inserts `value` under `key`.
    ///
    /// An existing key has its value replaced and becomes most recently used;
    /// the size does not change. A new key evicts the least recently used
    /// entry first if the cache is full.
    pub fn put(&mut self, key: K, value: V) {
        #[cfg(feature = "metrics")]
        self.metrics.record_put_call();

        if let Some(id) = self.index.lookup(&key) {
            if let Some(record) = self.list.get_mut(id) {
                record.value = value;
            }
            self.list.move_to_front(id);

            #[cfg(feature = "metrics")]
            self.metrics.record_put_update();
            return;
        }

        if self.list.len() >= self.capacity.get() {
            self.evict_one();
        }

        let id = self.list.insert_front(Record {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(feature = "metrics")]
        self.metrics.record_put_new();
    }

    /// Borrows the value for `key` without changing recency.
    ///
    /// ```
    /// use lrukit::policy::lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2).unwrap();
    /// cache.put(1, "first");
    /// cache.put(2, "second");
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    ///
    /// // 1 is still least recent and goes first.
    /// cache.put(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = self.index.lookup(key)?;
        self.list.get(id).map(|record| &record.value)
    }

    /// Returns `true` if `key` is cached. Does not change recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Marks `key` most recently used. Returns `false` on a miss.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(id) = self.index.lookup(key) else {
            return false;
        };
        self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        self.metrics.record_touch_found();
        true
    }

    /// The entry the next overflowing `put` would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        let (_, record) = self.list.peek_least_recent()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_found();
        Some((&record.key, &record.value))
    }

    /// Position of `key` in recency order; `0` is most recent.
    pub fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let target = self.index.lookup(key)?;
        let rank = self.list.iter_entries().position(|(id, _)| {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();
            id == target
        })?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_found();
        Some(rank)
    }

    /// Iterates `(key, value)` from most to least recently used.
    /// Does not change recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.list.iter().map(|record| (&record.key, &record.value))
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        debug!(dropped = self.list.len(), "clearing lru cache");
        self.list.clear();
        self.index.clear();
    }

    /// Verifies that the index and the recency list describe the same set of
    /// entries and that the size bound holds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity.get() {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.list.len(),
                self.capacity
            )));
        }
        for (key, id) in self.index.iter() {
            if !self.list.contains(id) {
                return Err(InvariantError::new(format!(
                    "index points at slot {} which is not linked",
                    id.index()
                )));
            }
            if self.list.get(id).is_none_or(|record| record.key != *key) {
                return Err(InvariantError::new(format!(
                    "slot {} holds a different key than the index entry",
                    id.index()
                )));
            }
        }
        Ok(())
    }

    fn promote(&mut self, key: &K) -> Option<&V> {
        let Some(id) = self.index.lookup(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|record| &record.value)
    }

    fn evict_one(&mut self) {
        let Some((slot, record)) = self.list.evict_least_recent() else {
            return;
        };
        self.index.remove(&record.key);
        trace!(
            slot = slot.index(),
            len = self.list.len(),
            "evicted least recently used entry"
        );

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_calls: self.metrics.put_calls,
            put_new: self.metrics.put_new,
            put_updates: self.metrics.put_updates,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            cache_len: self.len(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruCache::metrics_snapshot(self)
    }
}

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    #[inline]
    fn put(&mut self, key: K, value: V) {
        LruCache::put(self, key, value);
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LruCache::capacity(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self);
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.list.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache with a capacity of 16.
    fn default() -> Self {
        Self::from_nonzero(DEFAULT_CAPACITY)
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

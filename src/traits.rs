//! # Cache Traits
//!
//! Generic interface over the LRU cache so callers can be written against the
//! policy instead of the concrete type.
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  put(&mut, K, V)                        │
//!   │  get(&mut, &K) → Option<V>              │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity              │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  peek_lru() → Option<(&K, &V)>          │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Neither trait offers per-key removal: entries leave the cache only through
//! capacity eviction or `clear`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::{CoreCache, LruCacheTrait};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.put(*key, value.to_string());
//!     }
//! }
//!
//! let mut cache = LruCache::new(2).unwrap();
//! warm(&mut cache, &[(1, "one"), (2, "two")]);
//! assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(1));
//! ```
//!
//! ## Thread Safety
//!
//! Implementations are single-threaded and take `&mut self` for every
//! operation that changes recency. Callers that share a cache across threads
//! wrap the whole cache in one lock.

/// Operations every cache supports.
pub trait CoreCache<K, V> {
    /// Inserts or updates `key`. A new key may evict the least recently used
    /// entry when the cache is full; an existing key is updated in place.
    fn put(&mut self, key: K, value: V);

    /// Returns a copy of the value for `key` and marks it most recently used.
    ///
    /// `None` means the key is not cached. There is no reserved "missing"
    /// value, so every `V` can be cached and read back.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Returns `true` if `key` is cached. Does not change recency.
    fn contains(&self, key: &K) -> bool;

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes every entry. Capacity is unchanged.
    fn clear(&mut self);
}

/// Recency-specific operations for LRU caches.
pub trait LruCacheTrait<K, V>: CoreCache<K, V> {
    /// The entry that the next overflowing `put` would evict.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks `key` most recently used without reading it.
    ///
    /// Returns `false` if the key is not cached.
    fn touch(&mut self, key: &K) -> bool;

    /// Position of `key` in recency order, `0` being most recent. O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal capacity-1 cache used to exercise the default methods.
    struct SingleSlot {
        slot: Option<(u32, String)>,
    }

    impl CoreCache<u32, String> for SingleSlot {
        fn put(&mut self, key: u32, value: String) {
            self.slot = Some((key, value));
        }

        fn get(&mut self, key: &u32) -> Option<String> {
            self.slot
                .as_ref()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }

        fn contains(&self, key: &u32) -> bool {
            self.slot.as_ref().is_some_and(|(k, _)| k == key)
        }

        fn len(&self) -> usize {
            usize::from(self.slot.is_some())
        }

        fn capacity(&self) -> usize {
            1
        }

        fn clear(&mut self) {
            self.slot = None;
        }
    }

    #[test]
    fn is_empty_default_follows_len() {
        let mut cache = SingleSlot { slot: None };
        assert!(cache.is_empty());
        cache.put(1, "a".to_string());
        assert!(!cache.is_empty());
        assert_eq!(cache.get(&1), Some("a".to_string()));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn traits_are_object_safe() {
        let cache: Box<dyn CoreCache<u32, String>> = Box::new(SingleSlot { slot: None });
        assert_eq!(cache.capacity(), 1);
    }
}

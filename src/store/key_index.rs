//! Key → handle index.
//!
//! ## Architecture
//! - Maps each live key to the [`SlotId`] of its entry in the recency list.
//! - Holds handles only; the entries themselves are owned by the list's arena.
//! - Backed by `FxHashMap` for fast hashing of small keys.
//!
//! ## Core Operations
//! - `lookup`: O(1) expected.
//! - `insert`: overwrites silently and returns the previous handle.
//! - `remove`: no-op if the key is absent.
//!
//! ## Example Usage
//! ```rust
//! use lrukit::ds::RecencyList;
//! use lrukit::store::key_index::KeyIndex;
//!
//! let mut list = RecencyList::new();
//! let mut index = KeyIndex::new();
//!
//! let id = list.insert_front("value");
//! index.insert("key", id);
//! assert_eq!(index.lookup(&"key"), Some(id));
//! ```
use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::slot_arena::SlotId;

/// Mapping from key to the handle of its entry.
#[derive(Debug, Clone)]
pub struct KeyIndex<K> {
    map: FxHashMap<K, SlotId>,
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Creates an index that can hold `capacity` keys without rehashing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn lookup<Q>(&self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key).copied()
    }

    /// Maps `key` to `id`, returning the handle it replaced.
    #[inline]
    pub fn insert(&mut self, key: K, id: SlotId) -> Option<SlotId> {
        self.map.insert(key, id)
    }

    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.remove(key)
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterates `(key, handle)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, SlotId)> {
        self.map.iter().map(|(key, id)| (key, *id))
    }
}

impl<K> Default for KeyIndex<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::slot_arena::SlotArena;

    #[test]
    fn lookup_insert_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert(());
        let b = arena.insert(());

        let mut index = KeyIndex::new();
        assert_eq!(index.lookup(&1), None);
        assert_eq!(index.insert(1, a), None);
        assert_eq!(index.insert(2, b), None);
        assert_eq!(index.lookup(&1), Some(a));
        assert_eq!(index.len(), 2);

        assert_eq!(index.remove(&1), Some(a));
        assert_eq!(index.remove(&1), None);
        assert!(!index.contains(&1));
        assert!(index.contains(&2));
    }

    #[test]
    fn insert_overwrites_and_returns_previous() {
        let mut index = KeyIndex::with_capacity(4);
        assert_eq!(index.insert("k", SlotId(0)), None);
        assert_eq!(index.insert("k", SlotId(7)), Some(SlotId(0)));
        assert_eq!(index.lookup("k"), Some(SlotId(7)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn borrowed_lookup_for_string_keys() {
        let mut index: KeyIndex<String> = KeyIndex::new();
        index.insert("alpha".to_string(), SlotId(3));
        assert_eq!(index.lookup("alpha"), Some(SlotId(3)));
        assert!(index.contains("alpha"));
        assert_eq!(index.remove("alpha"), Some(SlotId(3)));
        assert!(index.is_empty());
    }

    #[test]
    fn clear_and_iter() {
        let mut index = KeyIndex::new();
        index.insert(1u32, SlotId(0));
        index.insert(2u32, SlotId(1));
        let mut pairs: Vec<_> = index.iter().map(|(k, id)| (*k, id.index())).collect();
        pairs.sort();
        assert_eq!(pairs, vec![(1, 0), (2, 1)]);
        index.clear();
        assert!(index.is_empty());
    }
}

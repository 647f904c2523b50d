//! Contiguous slot storage with stable integer handles.
//!
//! `SlotArena` is the single owner of every cache entry. Other structures
//! (the recency links, the key index) refer to entries by [`SlotId`], an index
//! into the arena, so no entry ever has two owners and there are no reference
//! cycles between records.
//!
//! Vacant slots form a free chain threaded through the slots themselves, so a
//! freed position is reused by the next insert without extra allocation.
//!
//! ```text
//!   slots: [ Occupied(A) | Vacant{next: 3} | Occupied(C) | Vacant{next: END} ]
//!   free_head ──► 1 ──► 3 ──► END
//! ```

/// Handle to a slot in a [`SlotArena`].
///
/// A `SlotId` is only meaningful for the arena that produced it. After the slot
/// is removed the id may be reused for a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot position.
    pub fn index(self) -> usize {
        self.0
    }
}

const FREE_END: usize = usize::MAX;

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: usize },
}

/// Arena of `T` values addressed by [`SlotId`].
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: usize,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: FREE_END,
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: FREE_END,
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a vacant slot if any.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = if self.free_head != FREE_END {
            let idx = self.free_head;
            if let Slot::Vacant { next_free } = self.slots[idx] {
                self.free_head = next_free;
            }
            self.slots[idx] = Slot::Occupied(value);
            idx
        } else {
            self.slots.push(Slot::Occupied(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Frees the slot and returns its value; `None` if already vacant.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        let Slot::Occupied(value) = std::mem::replace(slot, vacant) else {
            return None;
        };
        self.free_head = id.0;
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Drops every value. Allocated storage is retained.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = FREE_END;
        self.len = 0;
    }

    /// Iterates occupied slots in slot order (not insertion order).
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(value) => Some((SlotId(idx), value)),
                Slot::Vacant { .. } => None,
            })
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_insert_remove_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.insert("a");
        let id2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.remove(id1), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(id1));

        let id3 = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
    }

    #[test]
    fn slot_arena_double_remove_is_none() {
        let mut arena = SlotArena::new();
        let id = arena.insert(1);
        assert_eq!(arena.remove(id), Some(1));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn slot_arena_free_chain_is_lifo() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        let _c = arena.insert(3);
        arena.remove(a);
        arena.remove(b);

        // Most recently freed slot is handed out first.
        assert_eq!(arena.insert(4), b);
        assert_eq!(arena.insert(5), a);
        assert_eq!(arena.insert(6).index(), 3);
    }

    #[test]
    fn slot_arena_get_mut_and_out_of_range() {
        let mut arena = SlotArena::with_capacity(4);
        assert!(arena.capacity() >= 4);
        let id = arena.insert(10);
        if let Some(v) = arena.get_mut(id) {
            *v = 20;
        }
        assert_eq!(arena.get(id), Some(&20));
        assert_eq!(arena.get(SlotId(99)), None);
        assert_eq!(arena.remove(SlotId(99)), None);
    }

    #[test]
    fn slot_arena_iter_skips_vacant() {
        let mut arena = SlotArena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        arena.remove(b);
        let seen: Vec<_> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(seen, vec![(a, 'a'), (c, 'c')]);

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.iter().count(), 0);
    }
}

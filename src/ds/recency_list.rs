//! Doubly linked recency list with typed sentinels, backed by `SlotArena`.
//!
//! Entries are stored in a [`SlotArena`] and linked by [`SlotId`]. The two ends
//! of the list are sentinels, but they are not entries: they are the
//! [`Link::Head`] and [`Link::Tail`] variants of the link type. An empty list
//! is the two sentinels wired to each other, and no key or value stored in the
//! list can ever be mistaken for a boundary marker.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Entry<T>>)
//!   ┌────────┬───────────────────────────────────────────────────┐
//!   │ SlotId │ Entry { value, links }                            │
//!   ├────────┼───────────────────────────────────────────────────┤
//!   │ id_1   │ { A, Some { prev: Head,        next: Entry(id_2) } } │
//!   │ id_2   │ { B, Some { prev: Entry(id_1), next: Entry(id_3) } } │
//!   │ id_3   │ { C, Some { prev: Entry(id_2), next: Tail } }        │
//!   │ id_4   │ { D, None }   (unlinked, still owned by the arena)   │
//!   └────────┴───────────────────────────────────────────────────┘
//!
//!   HEAD ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄─ TAIL
//!           most recent               least recent
//! ```
//!
//! ## Operations
//! - `insert_front(value)`: allocate + attach after the head sentinel
//! - `unlink(id)`: detach, keep the entry allocated
//! - `attach_front(id)`: re-attach an unlinked entry after the head sentinel
//! - `move_to_front(id)`: unlink + attach_front
//! - `evict_least_recent()`: detach + free the entry before the tail sentinel
//!
//! All of the above are O(1). Iteration and `check_invariants` are O(n).

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// Position a link can point at: a sentinel or a live entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Head,
    Tail,
    Entry(SlotId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Links {
    prev: Link,
    next: Link,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    /// `None` while the entry is unlinked.
    links: Option<Links>,
}

/// Recency-ordered list. Front = most recently used, back = least recently used.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Entry<T>>,
    /// Successor of the head sentinel.
    head_next: Link,
    /// Predecessor of the tail sentinel.
    tail_prev: Link,
    linked: usize,
}

impl<T> RecencyList<T> {
    /// Creates an empty list: head and tail sentinels wired to each other.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with arena room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head_next: Link::Tail,
            tail_prev: Link::Head,
            linked: 0,
        }
    }

    /// Number of entries currently linked between the sentinels.
    pub fn len(&self) -> usize {
        self.linked
    }

    pub fn is_empty(&self) -> bool {
        self.linked == 0
    }

    /// Returns `true` if `id` is linked into the list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena
            .get(id)
            .is_some_and(|entry| entry.links.is_some())
    }

    /// Value stored at `id`, linked or not.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Most recently used value.
    pub fn front(&self) -> Option<&T> {
        self.front_id().and_then(|id| self.get(id))
    }

    pub fn front_id(&self) -> Option<SlotId> {
        match self.head_next {
            Link::Entry(id) => Some(id),
            Link::Head | Link::Tail => None,
        }
    }

    /// Least recently used value.
    pub fn back(&self) -> Option<&T> {
        self.back_id().and_then(|id| self.get(id))
    }

    pub fn back_id(&self) -> Option<SlotId> {
        match self.tail_prev {
            Link::Entry(id) => Some(id),
            Link::Head | Link::Tail => None,
        }
    }

    /// Returns the entry adjacent to the tail sentinel without removing it.
    pub fn peek_least_recent(&self) -> Option<(SlotId, &T)> {
        let id = self.back_id()?;
        self.get(id).map(|value| (id, value))
    }

    /// Allocates a new entry and attaches it right after the head sentinel.
    pub fn insert_front(&mut self, value: T) -> SlotId {
        let old_first = self.head_next;
        let id = self.arena.insert(Entry {
            value,
            links: Some(Links {
                prev: Link::Head,
                next: old_first,
            }),
        });
        self.set_prev(old_first, Link::Entry(id));
        self.head_next = Link::Entry(id);
        self.linked += 1;
        id
    }

    /// Detaches `id` from the list without freeing it; its former neighbors
    /// are linked to each other.
    ///
    /// Returns `false` if `id` is not a linked entry.
    pub fn unlink(&mut self, id: SlotId) -> bool {
        let Some(links) = self.arena.get_mut(id).and_then(|entry| entry.links.take()) else {
            return false;
        };
        self.set_next(links.prev, links.next);
        self.set_prev(links.next, links.prev);
        self.linked -= 1;
        true
    }

    /// Re-attaches an unlinked entry right after the head sentinel.
    ///
    /// Returns `false` if `id` is unknown or already linked.
    pub fn attach_front(&mut self, id: SlotId) -> bool {
        let old_first = self.head_next;
        match self.arena.get_mut(id) {
            Some(entry) if entry.links.is_none() => {
                entry.links = Some(Links {
                    prev: Link::Head,
                    next: old_first,
                });
            },
            _ => return false,
        }
        self.set_prev(old_first, Link::Entry(id));
        self.head_next = Link::Entry(id);
        self.linked += 1;
        true
    }

    /// Moves a linked entry to the most-recent position.
    ///
    /// Returns `false` if `id` is not a linked entry.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if self.head_next == Link::Entry(id) {
            return true;
        }
        self.unlink(id) && self.attach_front(id)
    }

    /// Removes and returns the entry adjacent to the tail sentinel.
    ///
    /// Returns `None` when the list is empty.
    pub fn evict_least_recent(&mut self) -> Option<(SlotId, T)> {
        let id = self.back_id()?;
        self.remove(id).map(|value| (id, value))
    }

    /// Unlinks `id` if needed and frees its slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id);
        self.arena.remove(id).map(|entry| entry.value)
    }

    /// Drops every entry and rewires the sentinels to each other.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head_next = Link::Tail;
        self.tail_prev = Link::Head;
        self.linked = 0;
    }

    /// Values from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.iter_entries().map(|(_, value)| value)
    }

    /// `(SlotId, &T)` pairs from most to least recently used.
    pub fn iter_entries(&self) -> RecencyIter<'_, T> {
        RecencyIter {
            list: self,
            current: self.head_next,
            remaining: self.linked,
        }
    }

    /// Walks head to tail and verifies every link.
    ///
    /// Checks that each step's back-link points at the previous step, that the
    /// walk ends at the tail sentinel after exactly `len()` entries, and that
    /// no linked entry is left unreachable.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut prev = Link::Head;
        let mut current = self.head_next;
        let mut count = 0usize;

        while let Link::Entry(id) = current {
            let entry = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale link to slot {:?}", id)))?;
            let links = entry
                .links
                .ok_or_else(|| InvariantError::new(format!("slot {:?} reachable but unlinked", id)))?;
            if links.prev != prev {
                return Err(InvariantError::new(format!(
                    "slot {:?} prev is {:?}, expected {:?}",
                    id, links.prev, prev
                )));
            }
            count += 1;
            if count > self.linked {
                return Err(InvariantError::new(format!(
                    "walk exceeded linked count {} (cycle?)",
                    self.linked
                )));
            }
            prev = current;
            current = links.next;
        }

        if current != Link::Tail {
            return Err(InvariantError::new("walk did not end at the tail sentinel"));
        }
        if self.tail_prev != prev {
            return Err(InvariantError::new(format!(
                "tail sentinel prev is {:?}, expected {:?}",
                self.tail_prev, prev
            )));
        }
        if count != self.linked {
            return Err(InvariantError::new(format!(
                "walked {} entries, linked count is {}",
                count, self.linked
            )));
        }
        let attached = self
            .arena
            .iter()
            .filter(|(_, entry)| entry.links.is_some())
            .count();
        if attached != count {
            return Err(InvariantError::new(format!(
                "{} entries carry links but only {} are reachable",
                attached, count
            )));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("recency list invariant violated: {}", err);
        }
    }

    fn set_next(&mut self, at: Link, to: Link) {
        match at {
            Link::Head => self.head_next = to,
            Link::Entry(id) => {
                if let Some(links) = self.arena.get_mut(id).and_then(|e| e.links.as_mut()) {
                    links.next = to;
                }
            },
            Link::Tail => debug_assert!(false, "tail sentinel has no successor"),
        }
    }

    fn set_prev(&mut self, at: Link, to: Link) {
        match at {
            Link::Tail => self.tail_prev = to,
            Link::Entry(id) => {
                if let Some(links) = self.arena.get_mut(id).and_then(|e| e.links.as_mut()) {
                    links.prev = to;
                }
            },
            Link::Head => debug_assert!(false, "head sentinel has no predecessor"),
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(SlotId, &T)` from most to least recently used.
pub struct RecencyIter<'a, T> {
    list: &'a RecencyList<T>,
    current: Link,
    remaining: usize,
}

impl<'a, T> Iterator for RecencyIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let Link::Entry(id) = self.current else {
            return None;
        };
        let entry = self.list.arena.get(id)?;
        self.current = entry.links.map_or(Link::Tail, |links| links.next);
        self.remaining = self.remaining.saturating_sub(1);
        Some((id, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

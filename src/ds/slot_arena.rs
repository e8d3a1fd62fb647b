//! Slot arena owning recency-list nodes.
//!
//! Entries are stored in a `Vec<Option<T>>` and addressed by [`SlotId`].
//! Removing an entry leaves a hole that is pushed onto a free list and reused
//! by the next insert, so the backing vector never grows past the peak number
//! of simultaneously live entries.
//!
//! ```text
//!   slots:     [ Some(a) | None | Some(c) | None ]
//!   free_list: [ 3, 1 ]          ◄── next insert lands in slot 1
//! ```
//!
//! A `SlotId` is only meaningful while its entry is live. After `remove`,
//! lookups through the old id return `None` until the slot is reused.

/// Stable handle to an entry in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Vector-backed storage with free-list slot reuse.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a freed slot if any.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free_list.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none());
                self.slots[idx] = Some(value);
                idx
            },
            None => {
                self.slots.push(Some(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Takes the entry out of `id`, freeing the slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.0)?.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Returns `true` if `id` refers to a live entry.
    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots allocated so far, live or free.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drops every entry and forgets all handles.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
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
    fn insert_get_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert("S1");
        let b = arena.insert("S2");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"S1"));
        assert_eq!(arena.get(b), Some(&"S2"));

        assert_eq!(arena.remove(a), Some("S1"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));
        assert_eq!(arena.get(a), None);
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut arena = SlotArena::with_capacity(2);
        let a = arena.insert(1);
        arena.insert(2);
        arena.remove(a);

        let c = arena.insert(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.slot_count(), 2);
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    fn double_remove_is_none() {
        let mut arena = SlotArena::new();
        let a = arena.insert(7);
        assert_eq!(arena.remove(a), Some(7));
        assert_eq!(arena.remove(a), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn out_of_range_id_is_absent() {
        let mut arena: SlotArena<u8> = SlotArena::new();
        assert_eq!(arena.get(SlotId(42)), None);
        assert_eq!(arena.remove(SlotId(42)), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = SlotArena::new();
        let id = arena.insert(String::from("S1"));
        if let Some(v) = arena.get_mut(id) {
            v.push('!');
        }
        assert_eq!(arena.get(id).map(String::as_str), Some("S1!"));
    }

    #[test]
    fn clear_resets() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        arena.insert(2);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.slot_count(), 0);
        assert!(!arena.contains(a));
        assert_eq!(arena.insert(9).index(), 0);
    }
}

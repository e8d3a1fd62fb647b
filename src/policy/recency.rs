//! Fixed-capacity recency store.
//!
//! Maps each key to exactly one value (for example a user to the song they
//! played last) and keeps keys ordered from most to least recently used.
//! When a genuinely new key arrives at full capacity, the least recently used
//! key is evicted first.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>           list: IntrusiveList<Entry<K, V>>
//!   ┌─────────┬────────┐
//!   │ "alice" │ id_2   │──┐        head (MRU)                 tail (LRU)
//!   │ "bob"   │ id_0   │──┼──┐        │                          │
//!   │ "carol" │ id_1   │──┼──┼──┐     ▼                          ▼
//!   └─────────┴────────┘  └──┼──┼─► [id_2] ◄──► [id_1] ◄──► [id_0]
//!                            │  └──────────────────┘            ▲
//!                            └──────────────────────────────────┘
//! ```
//!
//! The list's arena owns every entry. The index and the list links are
//! `SlotId` handles into it, never copies of the entry.
//!
//! ## Operations
//!
//! | Operation          | Effect                                              |
//! |--------------------|-----------------------------------------------------|
//! | `insert`           | refresh existing key, or evict LRU then add at MRU  |
//! | `remove`           | unlink and drop; no-op for an absent key            |
//! | `evict_lru`        | drop the tail entry; no-op when empty               |
//! | `get_and_promote`  | return the value and move the entry to MRU          |
//!
//! All four are O(1) amortized. There is no read-only value
//! lookup: reading a value is a use and always promotes.
//!
//! ## Example
//!
//! ```
//! use recentkit::policy::recency::RecencyStore;
//!
//! let mut store = RecencyStore::new(3);
//! store.insert("k1", "S1");
//! store.insert("k2", "S2");
//! store.insert("k3", "S3");
//!
//! assert_eq!(store.get_and_promote(&"k1"), Some(&"S1"));
//! assert_eq!(store.keys().copied().collect::<Vec<_>>(), ["k1", "k3", "k2"]);
//!
//! // k2 is now the least recently used
//! store.insert("k4", "S4");
//! assert!(!store.contains(&"k2"));
//! ```

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;
use crate::error::{ConfigError, InvariantError};

/// String-keyed store tracking each user's most recently played song.
pub type RecentlyPlayed = RecencyStore<String, String>;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Capacity-bounded key → value map ordered by recency of use.
///
/// # Example
///
/// ```
/// use recentkit::policy::recency::RecentlyPlayed;
///
/// let mut played = RecentlyPlayed::new(2);
/// played.insert("alice".into(), "S1".into());
/// played.insert("alice".into(), "S2".into()); // refresh, not a new entry
/// assert_eq!(played.len(), 1);
/// assert_eq!(played.get_and_promote("alice").map(String::as_str), Some("S2"));
/// ```
#[derive(Debug)]
pub struct RecencyStore<K, V> {
    index: FxHashMap<K, SlotId>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> RecencyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(store) => store,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates an empty store, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is zero.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_prealloc(capacity, true)
    }

    pub(crate) fn try_with_prealloc(capacity: usize, prealloc: bool) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        let reserve = if prealloc { capacity } else { 0 };
        debug!(capacity, prealloc, "creating recency store");
        Ok(Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            list: IntrusiveList::with_capacity(reserve),
            capacity,
        })
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries; fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if `key` has an entry. Does not promote it.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Inserts `value` for `key` at the most recently used position.
    ///
    /// An existing entry for `key` is replaced and never counts against
    /// capacity. A new key arriving at full capacity first evicts the least
    /// recently used entry.
    ///
    /// ```
    /// use recentkit::policy::recency::RecencyStore;
    ///
    /// let mut store = RecencyStore::new(2);
    /// store.insert(1, "a");
    /// store.insert(2, "b");
    /// store.insert(1, "A"); // refresh: nothing evicted
    /// assert_eq!(store.len(), 2);
    ///
    /// store.insert(3, "c"); // evicts 2, the LRU
    /// assert!(!store.contains(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        if self.index.contains_key(&key) {
            self.remove(&key);
        } else if self.index.len() >= self.capacity {
            self.evict_lru();
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
    }

    /// Removes the entry for `key`, if any.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(id) = self.index.remove(key) {
            self.list.remove(id);
        }
    }

    /// Removes the least recently used entry. Does nothing on an empty store.
    pub fn evict_lru(&mut self) {
        let Some(entry) = self.list.pop_back() else {
            return;
        };
        self.index.remove(&entry.key);
        trace!(
            len = self.index.len(),
            capacity = self.capacity,
            "evicted least recently used entry"
        );
    }

    /// Returns the value for `key` and marks the entry most recently used.
    ///
    /// The old node is unlinked and a fresh node carrying the same key and
    /// value is linked at the head. Returns `None` without side effects if
    /// `key` is absent.
    pub fn get_and_promote<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let old_id = *self.index.get(key)?;
        let entry = self.list.remove(old_id)?;
        let new_id = self.list.push_front(entry);
        if let Some(slot) = self.index.get_mut(key) {
            *slot = new_id;
        }
        self.list.get(new_id).map(|entry| &entry.value)
    }

    /// Key at the most recently used position.
    pub fn mru_key(&self) -> Option<&K> {
        self.list.front().map(|entry| &entry.key)
    }

    /// Key that the next eviction would remove.
    pub fn lru_key(&self) -> Option<&K> {
        self.list.back().map(|entry| &entry.key)
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    ///
    /// Iteration is read-only and does not promote anything.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    /// Cross-checks the index against the recency list.
    ///
    /// Walks the list head→tail and tail→head, and verifies that both walks
    /// visit the same keys, that every key maps to the node holding it, and
    /// that the size never exceeds capacity.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.index.len();
        if self.list.len() != len {
            return Err(InvariantError::new(format!(
                "index has {} keys but list has {} nodes",
                len,
                self.list.len()
            )));
        }
        if len > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                len, self.capacity
            )));
        }
        if (self.list.front_id().is_none() || self.list.back_id().is_none()) != (len == 0) {
            return Err(InvariantError::new(
                "head/tail presence disagrees with emptiness",
            ));
        }

        for (key, &id) in &self.index {
            let entry = self.list.get(id).ok_or_else(|| {
                InvariantError::new(format!("index holds stale slot {}", id.index()))
            })?;
            if entry.key != *key {
                return Err(InvariantError::new(format!(
                    "slot {} holds a different key than the index records",
                    id.index()
                )));
            }
        }

        let forward: Vec<&K> = self.list.iter().map(|entry| &entry.key).collect();
        if forward.len() != len {
            return Err(InvariantError::new(format!(
                "forward walk visited {} nodes, expected {}",
                forward.len(),
                len
            )));
        }
        if forward.iter().any(|key| !self.index.contains_key(*key)) {
            return Err(InvariantError::new("list holds a key missing from the index"));
        }

        let mut backward: Vec<&K> = self.list.iter_rev().map(|entry| &entry.key).collect();
        backward.reverse();
        if backward != forward {
            return Err(InvariantError::new(
                "backward walk does not mirror forward walk",
            ));
        }

        Ok(())
    }
}

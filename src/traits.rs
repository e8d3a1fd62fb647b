//! # Recency Cache Trait
//!
//! [`RecencyCache`] is the operation set of a recency store, so code that
//! records or reads "last used" state can be written against the trait
//! rather than a concrete type.
//!
//! ```text
//!   ┌──────────────────────────────────────────────┐
//!   │              RecencyCache<K, V>              │
//!   │                                              │
//!   │  insert(&mut, K, V)                          │
//!   │  remove(&mut, &K)                            │
//!   │  evict_lru(&mut)                             │
//!   │  get_and_promote(&mut, &K) → Option<&V>      │
//!   │  contains(&, &K) → bool                      │
//!   │  len(&) → usize / is_empty(&) → bool         │
//!   │  capacity(&) → usize                         │
//!   │  clear(&mut)                                 │
//!   └──────────────────────────────────────────────┘
//! ```
//!
//! Reading a value always takes `&mut self`: a lookup is a use and promotes
//! the entry. Only membership (`contains`) is available through `&self`.
//!
//! ## Example
//!
//! ```
//! use recentkit::policy::recency::RecencyStore;
//! use recentkit::traits::RecencyCache;
//!
//! fn record_plays<C: RecencyCache<String, String>>(cache: &mut C, plays: &[(&str, &str)]) {
//!     for (user, song) in plays {
//!         cache.insert(user.to_string(), song.to_string());
//!     }
//! }
//!
//! let mut store = RecencyStore::new(2);
//! record_plays(&mut store, &[("alice", "S1"), ("bob", "S2"), ("carol", "S3")]);
//! assert_eq!(RecencyCache::len(&store), 2);
//! assert!(!RecencyCache::contains(&store, &"alice".to_string()));
//! ```

use std::hash::Hash;

use crate::policy::recency::RecencyStore;

/// Fixed-capacity key → value store ordered by recency of use.
pub trait RecencyCache<K, V> {
    /// Inserts or refreshes `key` at the most recently used position.
    ///
    /// Evicts the least recently used entry first if `key` is new and the
    /// cache is full.
    fn insert(&mut self, key: K, value: V);

    /// Removes `key`; absent keys are ignored.
    fn remove(&mut self, key: &K);

    /// Removes the least recently used entry, if any.
    fn evict_lru(&mut self);

    /// Returns the value for `key`, promoting it to most recently used.
    fn get_and_promote(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is present. Never promotes.
    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;

    fn clear(&mut self);
}

impl<K, V> RecencyCache<K, V> for RecencyStore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) {
        RecencyStore::insert(self, key, value)
    }

    #[inline]
    fn remove(&mut self, key: &K) {
        RecencyStore::remove(self, key)
    }

    #[inline]
    fn evict_lru(&mut self) {
        RecencyStore::evict_lru(self)
    }

    #[inline]
    fn get_and_promote(&mut self, key: &K) -> Option<&V> {
        RecencyStore::get_and_promote(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        RecencyStore::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        RecencyStore::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        RecencyStore::capacity(self)
    }

    #[inline]
    fn clear(&mut self) {
        RecencyStore::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_all<C: RecencyCache<u32, &'static str>>(cache: &mut C, keys: &[u32]) -> usize {
        let mut hits = 0;
        for key in keys {
            if cache.get_and_promote(key).is_some() {
                hits += 1;
            }
        }
        hits
    }

    #[test]
    fn trait_object_drives_store() {
        let mut store = RecencyStore::new(3);
        let cache: &mut dyn RecencyCache<u32, &'static str> = &mut store;

        cache.insert(1, "a");
        cache.insert(2, "b");
        assert_eq!(cache.len(), 2);
        assert!(!cache.is_empty());
        assert_eq!(cache.capacity(), 3);

        assert_eq!(cache.get_and_promote(&1), Some(&"a"));
        cache.evict_lru();
        assert!(!cache.contains(&2));

        cache.remove(&1);
        assert!(cache.is_empty());
    }

    #[test]
    fn generic_caller_promotes_hits() {
        let mut store = RecencyStore::new(3);
        store.insert(1, "a");
        store.insert(2, "b");
        store.insert(3, "c");

        assert_eq!(touch_all(&mut store, &[1, 9, 2]), 2);
        assert_eq!(store.lru_key(), Some(&3));

        RecencyCache::clear(&mut store);
        assert!(store.is_empty());
    }
}

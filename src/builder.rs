//! Configuration builder for [`RecencyStore`].
//!
//! ## Example
//!
//! ```rust
//! use recentkit::builder::RecencyStoreBuilder;
//!
//! let mut store = RecencyStoreBuilder::new(100)
//!     .prealloc(false)
//!     .build::<String, String>();
//! store.insert("alice".to_string(), "S1".to_string());
//! assert_eq!(store.capacity(), 100);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::recency::RecencyStore;

/// Builder for recency stores.
///
/// | Option     | Default | Description                                   |
/// |------------|---------|-----------------------------------------------|
/// | `capacity` | -       | Maximum live entries; must be greater than 0  |
/// | `prealloc` | `true`  | Reserve index and node storage up front       |
#[derive(Debug, Clone)]
pub struct RecencyStoreBuilder {
    capacity: usize,
    prealloc: bool,
}

impl RecencyStoreBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            prealloc: true,
        }
    }

    /// Whether to reserve storage for `capacity` entries at build time.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.prealloc = prealloc;
        self
    }

    /// Builds the store.
    ///
    /// # Panics
    ///
    /// Panics if the configured capacity is zero. For a non-panicking
    /// alternative, use [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> RecencyStore<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(store) => store,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds the store, returning an error on invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configured capacity is zero.
    pub fn try_build<K, V>(self) -> Result<RecencyStore<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        RecencyStore::try_with_prealloc(self.capacity, self.prealloc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_working_store() {
        let mut store = RecencyStoreBuilder::new(2).build::<u32, &str>();
        store.insert(1, "a");
        store.insert(2, "b");
        store.insert(3, "c");
        assert_eq!(store.len(), 2);
        assert!(!store.contains(&1));
    }

    #[test]
    fn without_prealloc_behaves_the_same() {
        let mut store = RecencyStoreBuilder::new(2)
            .prealloc(false)
            .try_build::<u32, u32>()
            .unwrap();
        store.insert(1, 10);
        assert_eq!(store.get_and_promote(&1), Some(&10));
        store.check_invariants().unwrap();
    }

    #[test]
    fn zero_capacity_fails_try_build() {
        let err = RecencyStoreBuilder::new(0)
            .try_build::<u32, u32>()
            .unwrap_err();
        assert_eq!(err.message(), "capacity must be greater than zero");
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn zero_capacity_panics_in_build() {
        let _ = RecencyStoreBuilder::new(0).build::<u32, u32>();
    }
}

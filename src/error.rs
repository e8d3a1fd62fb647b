//! Error types for recentkit.
//!
//! Store operations are total: a missing key is a normal `None` or a no-op,
//! never an error. Errors only arise when configuring a store or when a
//! debug-build invariant check finds a corrupted structure.
//!
//! - [`ConfigError`]: invalid construction parameters (zero capacity).
//! - [`InvariantError`]: returned by
//!   [`RecencyStore::check_invariants`](crate::policy::recency::RecencyStore::check_invariants).
//!
//! ```
//! use recentkit::error::ConfigError;
//! use recentkit::policy::recency::RecencyStore;
//!
//! let store: Result<RecencyStore<String, String>, ConfigError> = RecencyStore::try_new(3);
//! assert!(store.is_ok());
//!
//! let bad = RecencyStore::<String, String>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when store configuration parameters are invalid.
///
/// # Example
///
/// ```
/// use recentkit::builder::RecencyStoreBuilder;
///
/// let err = RecencyStoreBuilder::new(0)
///     .try_build::<u32, u32>()
///     .unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the index and the recency list disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

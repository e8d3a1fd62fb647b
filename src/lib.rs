//! recentkit: a fixed-capacity recency store.
//!
//! [`RecencyStore`] maps each key to one value and evicts the least recently
//! used key when a new key arrives at capacity. Entries live in a slot arena;
//! the hash index and the recency list hold `SlotId` handles into it.
//!
//! ```
//! use recentkit::prelude::*;
//!
//! let mut played = RecentlyPlayed::new(3);
//! played.insert("alice".into(), "S1".into());
//! assert_eq!(played.get_and_promote("alice").map(String::as_str), Some("S1"));
//! assert_eq!(played.get_and_promote("bob"), None);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use policy::recency::{RecencyStore, RecentlyPlayed};

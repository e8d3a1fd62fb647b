pub use crate::builder::RecencyStoreBuilder;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::recency::{RecencyStore, RecentlyPlayed};
pub use crate::traits::RecencyCache;

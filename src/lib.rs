//! lrukit: a fixed-capacity LRU cache on an arena-backed recency list.
//!
//! - [`policy::lru::LruCache`]: the cache (`get` / `put`, O(1) expected).
//! - [`ds::RecencyList`]: recency order with typed head/tail sentinels.
//! - [`store::key_index::KeyIndex`]: key → [`ds::SlotId`] handle index.
//! - [`builder::LruCacheBuilder`]: validated construction.
//!
//! The crate emits `tracing` events (cache construction, clears, evictions)
//! and never installs a subscriber itself.

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod store;
pub mod traits;

pub use crate::ds::{RecencyList, SlotArena, SlotId};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
pub use crate::policy::lru::LruCache;

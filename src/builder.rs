//! Cache configuration builder.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::LruCacheBuilder;
//!
//! let mut cache = LruCacheBuilder::new(100).build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some("hello".to_string()));
//!
//! // Invalid configuration is reported instead of panicking.
//! assert!(LruCacheBuilder::new(0).try_build::<u64, String>().is_err());
//! ```

use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::error::ConfigError;
use crate::policy::lru::LruCache;

/// Builder for [`LruCache`].
///
/// | Setting    | Default | Description                                       |
/// |------------|---------|---------------------------------------------------|
/// | `capacity` | —       | Maximum entries, must be > 0                      |
/// | `prealloc` | `true`  | Reserve index and arena storage for `capacity`    |
#[derive(Debug, Clone)]
pub struct LruCacheBuilder {
    capacity: usize,
    prealloc: bool,
}

impl LruCacheBuilder {
    /// Creates a builder for a cache of `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            prealloc: true,
        }
    }

    /// Whether to reserve storage for the full capacity up front.
    ///
    /// Turn off for large capacities that are rarely filled.
    pub fn prealloc(mut self, prealloc: bool) -> Self {
        self.prealloc = prealloc;
        self
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. For a non-panicking alternative, use
    /// [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds the cache, returning an error on invalid configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the capacity is zero.
    pub fn try_build<K, V>(self) -> Result<LruCache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let capacity = NonZeroUsize::new(self.capacity)
            .ok_or_else(|| ConfigError::new("cache capacity must be greater than zero"))?;
        Ok(LruCache::with_layout(capacity, self.prealloc))
    }
}

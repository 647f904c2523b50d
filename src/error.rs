//! Error types for lrukit.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache is constructed with invalid
//!   parameters (a capacity of zero).
//! - [`InvariantError`]: Returned by `check_invariants` diagnostics when the
//!   recency list and the key index disagree.
//!
//! A cache miss is not an error: `get` and `peek` report it as `None`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::policy::lru::LruCache;
//!
//! let cache: Result<LruCache<u64, String>, ConfigError> = LruCache::new(128);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is rejected up front instead of corrupting eviction later.
//! let bad = LruCache::<u64, String>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`LruCache::new`](crate::policy::lru::LruCache::new) and
/// [`LruCacheBuilder::try_build`](crate::builder::LruCacheBuilder::try_build).
/// An instance that failed to construct does not exist, so the error is
/// unrecoverable for that instance.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
///
/// let err = LruCache::<u64, u64>::new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
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
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an internal cache invariant is violated.
///
/// Carries a description of the first invariant found broken, e.g. a stale
/// handle in the key index or a broken back-link in the recency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
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

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

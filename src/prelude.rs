pub use crate::builder::LruCacheBuilder;
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait};

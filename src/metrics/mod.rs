//! Optional operation counters for the LRU cache (feature `metrics`).
//!
//! Recording and reading are split: [`traits`] holds the recorder interfaces
//! the cache calls into, [`metrics_impl`] the counters, and [`snapshot`] the
//! plain `Copy` view handed to callers.

pub mod cell;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

//! # Metrics Recorder Traits
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │   &mut self: get / put / evict / clear
//!   └──────────────┬──────────────┘
//!                  ▼
//!   ┌─────────────────────────────┐
//!   │     LruMetricsRecorder      │   &mut self: touch
//!   └─────────────────────────────┘
//!
//!   ┌─────────────────────────────┐
//!   │   LruMetricsReadRecorder    │   &self: peek_lru / recency_rank
//!   └─────────────────────────────┘
//!
//!   ┌─────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>  │   read side, used by callers and tests
//!   └─────────────────────────────┘
//! ```
//!
//! Recorders only write counters; providers only read them.

/// Counters shared by every cache operation that takes `&mut self`.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_put_call(&mut self);
    fn record_put_new(&mut self);
    fn record_put_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Recency-specific counters.
pub trait LruMetricsRecorder: CoreMetricsRecorder {
    fn record_touch_call(&mut self);
    fn record_touch_found(&mut self);
}

/// Counters for `&self` operations (interior mutability).
pub trait LruMetricsReadRecorder {
    fn record_peek_lru_call(&self);
    fn record_peek_lru_found(&self);
    fn record_recency_rank_call(&self);
    fn record_recency_rank_found(&self);
    fn record_recency_rank_scan_step(&self);
}

/// Produces a point-in-time copy of a cache's counters.
pub trait MetricsSnapshotProvider<S> {
    fn metrics_snapshot(&self) -> S;
}

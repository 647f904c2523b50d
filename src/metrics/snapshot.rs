/// Point-in-time copy of an [`LruCache`](crate::policy::lru::LruCache)'s counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub put_calls: u64,
    pub put_new: u64,
    pub put_updates: u64,

    pub evicted_entries: u64,
    pub clear_calls: u64,

    pub touch_calls: u64,
    pub touch_found: u64,
    pub peek_lru_calls: u64,
    pub peek_lru_found: u64,
    pub recency_rank_calls: u64,
    pub recency_rank_found: u64,
    pub recency_rank_scan_steps: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl LruMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `0.0` before the first `get`.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_handles_zero_calls() {
        assert_eq!(LruMetricsSnapshot::default().hit_ratio(), 0.0);
    }

    #[test]
    fn hit_ratio_is_hits_over_calls() {
        let snap = LruMetricsSnapshot {
            get_calls: 4,
            get_hits: 3,
            get_misses: 1,
            ..Default::default()
        };
        assert!((snap.hit_ratio() - 0.75).abs() < f64::EPSILON);
    }
}

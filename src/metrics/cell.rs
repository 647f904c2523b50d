use std::cell::Cell;

/// Counter that can be bumped through `&self`.
///
/// Used for read-only cache operations (`peek_lru`, `recency_rank`) that do
/// not hold a mutable borrow. Not `Sync`; the cache is single-threaded.
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct MetricsCell(Cell<u64>);

impl MetricsCell {
    #[inline]
    pub fn new() -> Self {
        Self(Cell::new(0))
    }

    #[inline]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub fn incr(&self) {
        self.0.set(self.0.get().saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incr_through_shared_ref() {
        let cell = MetricsCell::new();
        let shared = &cell;
        shared.incr();
        shared.incr();
        assert_eq!(cell.get(), 2);
    }
}

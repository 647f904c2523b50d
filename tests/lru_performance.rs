// ==============================================
// LRU PERFORMANCE TESTS (integration)
// ==============================================
//
// Coarse checks that get/put stay constant-time as the cache grows. Bounds are
// loose enough for unoptimized builds; precise numbers live in `benches/lru.rs`.

use lrukit::LruCache;
use std::time::{Duration, Instant};

/// Helper function to measure execution time of a closure
fn measure_time<F, R>(operation: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = operation();
    let duration = start.elapsed();
    (result, duration)
}

fn per_op_nanos(size: usize, iterations: u32) -> f64 {
    let mut cache = LruCache::new(size).unwrap();
    for i in 0..size {
        cache.put(i, i);
    }

    let (_, duration) = measure_time(|| {
        for i in 0..iterations as usize {
            // Alternate hits and evicting inserts.
            let _ = cache.get(&(i % size));
            cache.put(size + i, i);
        }
    });
    duration.as_nanos() as f64 / f64::from(iterations)
}

mod latency {
    use super::*;

    #[test]
    fn test_get_put_latency() {
        let mut cache = LruCache::new(1000).unwrap();
        for i in 0..1000 {
            cache.put(i, i * 10);
        }

        let iterations = 10_000u32;
        let (_, duration) = measure_time(|| {
            for i in 0..iterations as i32 {
                let _ = cache.get(&(i % 1000));
            }
        });

        let avg_latency = duration / iterations;
        println!("Average get latency: {:?}", avg_latency);
        assert!(
            avg_latency < Duration::from_micros(50),
            "Get operation too slow: {:?}",
            avg_latency
        );
    }

    #[test]
    fn test_cost_does_not_scale_with_size() {
        let small = per_op_nanos(100, 20_000);
        let large = per_op_nanos(50_000, 20_000);
        println!("small: {:.1} ns/op, large: {:.1} ns/op", small, large);

        // Linear behavior would be ~500x; allow generous noise for hashing and
        // cache effects.
        assert!(
            large < small * 50.0 + 1_000.0,
            "per-op cost grew with size: {:.1} -> {:.1} ns",
            small,
            large
        );
    }
}

// ==============================================
// LRU BEHAVIORAL INVARIANTS (integration)
// ==============================================
//
// Exercises the public API only: construction, eviction order, recency
// refresh, update-in-place and miss reporting.

use lrukit::prelude::*;
use proptest::prelude::*;

mod construction {
    use super::*;

    #[test]
    fn zero_capacity_fails_at_construction() {
        assert!(LruCache::<i64, i64>::new(0).is_err());
        assert!(LruCacheBuilder::new(0).try_build::<i64, i64>().is_err());
    }

    #[test]
    fn config_error_is_a_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(LruCache::<u8, u8>::new(0).unwrap_err());
        assert!(err.to_string().contains("greater than zero"));
    }
}

mod eviction_order {
    use super::*;

    #[test]
    fn overflow_evicts_oldest_of_n() {
        for n in [1usize, 2, 5, 64] {
            let mut cache = LruCache::new(n).unwrap();
            for k in 1..=n {
                cache.put(k, format!("v{}", k));
            }
            cache.put(n + 1, "new".to_string());

            assert_eq!(cache.get(&1), None, "capacity {}", n);
            for k in 2..=n {
                assert_eq!(cache.get(&k), Some(format!("v{}", k)));
            }
            assert_eq!(cache.get(&(n + 1)), Some("new".to_string()));
            assert_eq!(cache.len(), n);
        }
    }

    #[test]
    fn read_refreshes_recency() {
        let mut cache = LruCache::new(2).unwrap();
        cache.put(1, "a");
        cache.put(2, "b");
        assert_eq!(cache.get(&1), Some("a"));
        cache.put(3, "c");

        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&1), Some("a"));
        assert_eq!(cache.get(&3), Some("c"));
    }

    #[test]
    fn update_in_place_keeps_size() {
        let mut cache = LruCache::new(4).unwrap();
        cache.put(1, "a");
        cache.put(1, "b");
        assert_eq!(cache.get(&1), Some("b"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let mut cache = LruCache::new(3).unwrap();
        cache.put(1, 10u64);
        cache.put(2, 20u64);
        let before = cache.len();
        for _ in 0..10 {
            assert_eq!(cache.get(&1), Some(10));
            assert_eq!(cache.len(), before);
        }
    }
}

mod misses {
    use super::*;

    #[test]
    fn never_inserted_and_evicted_keys_miss() {
        let mut cache: LruCache<i32, i32> = LruCache::new(1).unwrap();
        assert_eq!(cache.get(&-1), None);
        assert_eq!(cache.get(&0), None);
        assert_eq!(cache.get(&i32::MIN), None);

        cache.put(5, 5);
        cache.put(6, 6);
        assert_eq!(cache.get(&5), None);
    }

    #[test]
    fn magic_looking_values_round_trip() {
        let mut cache: LruCache<i32, i32> = LruCache::new(3).unwrap();
        cache.put(-1, -1);
        cache.put(0, -1);
        cache.put(i32::MAX, i32::MIN);
        assert_eq!(cache.get(&-1), Some(-1));
        assert_eq!(cache.get(&0), Some(-1));
        assert_eq!(cache.get(&i32::MAX), Some(i32::MIN));
        assert_eq!(cache.get(&1), None);
    }
}

mod properties {
    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Put(i16, i16),
        Get(i16),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-8i16..32, any::<i16>()).prop_map(|(k, v)| Op::Put(k, v)),
            (-8i16..32).prop_map(Op::Get),
        ]
    }

    proptest! {
        #[cfg_attr(miri, ignore)]
        #[test]
        fn len_bounded_and_structures_agree(
            capacity in 1usize..20,
            ops in prop::collection::vec(op_strategy(), 0..300)
        ) {
            let mut cache = LruCache::new(capacity).unwrap();
            for op in ops {
                match op {
                    Op::Put(k, v) => cache.put(k, v),
                    Op::Get(k) => { cache.get(&k); },
                }
                prop_assert!(cache.len() <= capacity);
                prop_assert!(cache.check_invariants().is_ok());

                // Every live key resolves, and appears exactly once in order.
                let keys: Vec<i16> = cache.iter().map(|(k, _)| *k).collect();
                prop_assert_eq!(keys.len(), cache.len());
                for k in &keys {
                    prop_assert!(cache.contains(k));
                    prop_assert_eq!(keys.iter().filter(|x| *x == k).count(), 1);
                }
            }
        }

        #[cfg_attr(miri, ignore)]
        #[test]
        fn last_put_wins_while_resident(
            capacity in 1usize..8,
            puts in prop::collection::vec((0u8..16, any::<u32>()), 1..64)
        ) {
            let mut cache = LruCache::new(capacity).unwrap();
            for (k, v) in &puts {
                cache.put(*k, *v);
                prop_assert_eq!(cache.peek(k), Some(v));
            }
            // The most recent put is always resident.
            let (k, v) = puts[puts.len() - 1];
            prop_assert_eq!(cache.get(&k), Some(v));
        }
    }
}

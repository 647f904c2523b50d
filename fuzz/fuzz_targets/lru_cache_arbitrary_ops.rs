#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::LruCache;

// Fuzz arbitrary get/put/touch sequences on LruCache
//
// First byte picks the capacity; every following pair is (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&cap, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 32) + 1;
    let mut cache: LruCache<u8, u32> = LruCache::new(capacity).unwrap();

    for (step, chunk) in rest.chunks_exact(2).enumerate() {
        let key = chunk[1] % 64;
        match chunk[0] % 4 {
            0 => {
                cache.put(key, step as u32);
                assert_eq!(cache.peek(&key), Some(&(step as u32)));
                assert_eq!(cache.recency_rank(&key), Some(0));
            },
            1 => {
                let peeked = cache.peek(&key).copied();
                assert_eq!(cache.get(&key), peeked);
            },
            2 => {
                let present = cache.contains(&key);
                assert_eq!(cache.touch(&key), present);
            },
            _ => {
                let victim = cache.peek_lru().map(|(k, _)| *k);
                if cache.len() == capacity && !cache.contains(&key) {
                    cache.put(key, 0);
                    if let Some(v) = victim {
                        assert!(!cache.contains(&v));
                    }
                }
            },
        }

        assert!(cache.len() <= capacity);
        cache.check_invariants().unwrap();
    }
});

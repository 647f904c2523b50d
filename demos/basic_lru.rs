//! Walks through the basic LRU cache operations.
//!
//! Run with: `RUST_LOG=lrukit=trace cargo run --example basic_lru`

use lrukit::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cache = LruCache::new(2)?;
    cache.put(1, "a");
    cache.put(2, "b");
    println!("get(1) = {:?}", cache.get(&1));

    // 2 is now least recent and is evicted.
    cache.put(3, "c");
    println!("get(2) = {:?}", cache.get(&2));
    println!("get(3) = {:?}", cache.get(&3));

    cache.put(1, "a2");
    println!("after update, get(1) = {:?}, len = {}", cache.get(&1), cache.len());

    let order: Vec<_> = cache.iter().map(|(k, _)| *k).collect();
    println!("recency order (MRU -> LRU): {:?}", order);

    match LruCache::<u32, u32>::new(0) {
        Ok(_) => println!("unexpected: zero capacity accepted"),
        Err(e) => println!("zero capacity rejected: {}", e),
    }
    Ok(())
}

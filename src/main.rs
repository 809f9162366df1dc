//! Object Cache demo driver
//!
//! Exercises the process-wide cache: identity of the shared instance,
//! upsert/get/remove, eviction past the configured limit, and concurrent
//! writers.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use object_cache::{instance, CacheKey, CacheValue};

const WRITERS: i64 = 4;
const WRITES_PER_WORKER: i64 = 25;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "object_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let first = instance();
    let second = instance();
    if std::ptr::eq(first, second) {
        info!("Both references point to the same cache instance");
    } else {
        warn!("Cache accessor returned distinct instances");
    }

    let key = CacheKey::from("Test1");
    let stored = first.upsert(key.clone(), CacheValue::from("Test"));
    info!(stored, capacity = first.capacity(), "Upserted {}", key);

    if let Some(entry) = first.get(&key) {
        info!(
            value = ?entry.value(),
            last_updated = %entry.last_updated(),
            "Read {}", key
        );
    }

    let removed = first.remove(&key);
    info!(removed = removed.is_some(), "Removed {}", key);

    // Populate past the limit to trigger eviction
    for i in 1..5 {
        let stored = first.upsert(
            CacheKey::from(format!("Test{}", i)),
            CacheValue::from(format!("Test{}", i)),
        );
        info!(stored, size = first.len(), "Upserted Test{}", i);
    }

    let mut workers = Vec::new();
    for worker in 0..WRITERS {
        workers.push(tokio::task::spawn_blocking(move || {
            let cache = instance();
            (0..WRITES_PER_WORKER)
                .filter(|n| {
                    let id = worker * WRITES_PER_WORKER + n;
                    cache.upsert(CacheKey::from(id), CacheValue::from(*n))
                })
                .count()
        }));
    }

    let mut accepted = 0;
    for worker in workers {
        accepted += worker.await?;
    }
    info!(accepted, size = first.len(), "Concurrent writers finished");

    println!("{}", serde_json::to_string_pretty(&first.stats())?);

    Ok(())
}

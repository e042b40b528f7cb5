#![forbid(unsafe_code)]

use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use lru::LruCache;
use parking_lot::Mutex;
use url::Url;

use crate::cid::Cid;

/// A cached reachability observation for one `(gateway, cid)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthRecord {
    pub reachable: bool,
    pub checked_at: Instant,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct HealthKey {
    gateway: String,
    cid: Cid,
}

impl HealthKey {
    fn new(gateway: &Url, cid: &Cid) -> Self {
        Self {
            gateway: gateway.as_str().to_string(),
            cid: cid.clone(),
        }
    }
}

/// In-memory gateway health cache with TTL semantics.
///
/// ## Normative
/// - A record older than `ttl` is treated as absent and must be re-probed;
///   it is never trusted blindly.
/// - `set` unconditionally overwrites. Last-writer-wins is acceptable since
///   all writers for a key report freshly observed truth.
/// - Capacity is capped; least-recently-used entries are evicted beyond it.
/// - Process-scoped, not persisted.
pub struct HealthCache {
    inner: Mutex<LruCache<HealthKey, HealthRecord>>,
    ttl: Duration,
}

impl HealthCache {
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Returns the record for `(gateway, cid)` only if it is still fresh.
    pub fn get(&self, gateway: &Url, cid: &Cid, now: Instant) -> Option<HealthRecord> {
        let key = HealthKey::new(gateway, cid);
        let mut cache = self.inner.lock();
        let record = cache.get(&key).copied()?;

        if now.saturating_duration_since(record.checked_at) < self.ttl {
            Some(record)
        } else {
            None
        }
    }

    /// Records a probe outcome, overwriting any previous record for the key.
    pub fn set(&self, gateway: &Url, cid: &Cid, reachable: bool, now: Instant) {
        let key = HealthKey::new(gateway, cid);
        self.inner.lock().put(
            key,
            HealthRecord {
                reachable,
                checked_at: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl std::fmt::Debug for HealthCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.inner.try_lock().map(|c| c.len());
        f.debug_struct("HealthCache")
            .field("size", &size)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

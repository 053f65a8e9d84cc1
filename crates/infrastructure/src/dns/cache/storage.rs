use super::key::CacheKey;
use super::{CacheMetrics, CacheMetricsSnapshot, CachedAnswer};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use zonedns_domain::{CacheTtlPolicy, DnsQuery, RecordSet};

pub struct AnswerCacheConfig {
    /// Expiration used when the chosen TTL is zero.
    pub default_ttl: Duration,
    pub ttl_policy: CacheTtlPolicy,
    /// DashMap shard count; must be a power of two.
    pub shard_amount: usize,
}

impl Default for AnswerCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(2 * 60 * 60),
            ttl_policy: CacheTtlPolicy::First,
            shard_amount: 16,
        }
    }
}

/// Concurrent map from question to answer with per-entry expiration.
///
/// Expired entries stay in the map until [`AnswerCache::sweep_expired`]
/// runs, but are never returned once their expiration has passed.
pub struct AnswerCache {
    pub(super) entries: DashMap<CacheKey, CachedAnswer, FxBuildHasher>,
    default_ttl: Duration,
    ttl_policy: CacheTtlPolicy,
    pub(super) metrics: Arc<CacheMetrics>,
}

impl AnswerCache {
    pub fn new(config: AnswerCacheConfig) -> Self {
        info!(
            default_ttl_secs = config.default_ttl.as_secs(),
            ttl_policy = ?config.ttl_policy,
            "Initializing answer cache"
        );

        Self {
            entries: DashMap::with_hasher_and_shard_amount(
                FxBuildHasher,
                config.shard_amount.max(2).next_power_of_two(),
            ),
            default_ttl: config.default_ttl,
            ttl_policy: config.ttl_policy,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> &Arc<CacheMetrics> {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.len())
    }

    pub fn get(&self, query: &DnsQuery) -> Option<RecordSet> {
        self.get_at(query, Instant::now())
    }

    pub fn get_at(&self, query: &DnsQuery, now: Instant) -> Option<RecordSet> {
        let key = CacheKey::from_query(query);

        if let Some(entry) = self.entries.get(&key) {
            if !entry.is_expired_at(now) {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(entry.records.clone());
            }
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Stores a non-empty answer. Empty answers are never cached.
    pub fn insert(&self, query: &DnsQuery, records: RecordSet) {
        self.insert_at(query, records, Instant::now());
    }

    pub fn insert_at(&self, query: &DnsQuery, records: RecordSet, now: Instant) {
        let Some(ttl) = self.expiration_for(&records) else {
            return;
        };

        let key = CacheKey::from_query(query);
        debug!(
            key = key.as_str(),
            ttl_secs = ttl.as_secs(),
            records = records.len(),
            "Inserted answer into cache"
        );

        self.entries.insert(key, CachedAnswer::new(records, ttl, now));
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
    }

    /// How long `records` may be served from cache, or `None` for an empty answer.
    pub fn expiration_for(&self, records: &RecordSet) -> Option<Duration> {
        let ttl = match self.ttl_policy {
            CacheTtlPolicy::First => records.first()?.ttl,
            CacheTtlPolicy::Minimum => records.iter().map(|r| r.ttl).min()?,
        };

        if ttl == 0 {
            Some(self.default_ttl)
        } else {
            Some(Duration::from_secs(u64::from(ttl)))
        }
    }

    pub fn remove(&self, query: &DnsQuery) -> bool {
        self.entries.remove(&CacheKey::from_query(query)).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

mod helpers;

use helpers::a;
use std::time::{Duration, Instant};
use zonedns_domain::{CacheTtlPolicy, DnsQuery, RecordType};
use zonedns_infrastructure::dns::{AnswerCache, AnswerCacheConfig};

fn query(name: &str) -> DnsQuery {
    DnsQuery::new(name, RecordType::A)
}

fn cache_with_policy(ttl_policy: CacheTtlPolicy) -> AnswerCache {
    AnswerCache::new(AnswerCacheConfig {
        ttl_policy,
        ..Default::default()
    })
}

#[test]
fn test_hit_before_expiration() {
    let cache = cache_with_policy(CacheTtlPolicy::First);
    let now = Instant::now();
    let records = vec![a("example.com.", 60, [10, 0, 0, 1])];

    cache.insert_at(&query("example.com."), records.clone(), now);

    assert_eq!(
        cache.get_at(&query("example.com."), now + Duration::from_secs(59)),
        Some(records)
    );
}

#[test]
fn test_expired_entry_is_never_returned() {
    let cache = cache_with_policy(CacheTtlPolicy::First);
    let now = Instant::now();

    cache.insert_at(
        &query("example.com."),
        vec![a("example.com.", 60, [10, 0, 0, 1])],
        now,
    );

    assert!(cache
        .get_at(&query("example.com."), now + Duration::from_secs(60))
        .is_none());
    assert_eq!(cache.len(), 1, "entry stays until swept");
}

#[test]
fn test_empty_answers_are_not_cached() {
    let cache = cache_with_policy(CacheTtlPolicy::First);

    cache.insert(&query("example.com."), Vec::new());

    assert!(cache.is_empty());
    assert_eq!(cache.metrics_snapshot().insertions, 0);
}

#[test]
fn test_first_record_ttl_policy() {
    let cache = cache_with_policy(CacheTtlPolicy::First);
    let records = vec![
        a("example.com.", 300, [10, 0, 0, 1]),
        a("example.com.", 10, [10, 0, 0, 2]),
    ];

    assert_eq!(cache.expiration_for(&records), Some(Duration::from_secs(300)));
}

#[test]
fn test_minimum_ttl_policy() {
    let cache = cache_with_policy(CacheTtlPolicy::Minimum);
    let records = vec![
        a("example.com.", 300, [10, 0, 0, 1]),
        a("example.com.", 10, [10, 0, 0, 2]),
    ];

    assert_eq!(cache.expiration_for(&records), Some(Duration::from_secs(10)));
}

#[test]
fn test_zero_ttl_uses_default_expiration() {
    let cache = AnswerCache::new(AnswerCacheConfig {
        default_ttl: Duration::from_secs(7200),
        ..Default::default()
    });

    assert_eq!(
        cache.expiration_for(&vec![a("example.com.", 0, [10, 0, 0, 1])]),
        Some(Duration::from_secs(7200))
    );
    assert_eq!(cache.expiration_for(&Vec::new()), None);
}

#[test]
fn test_unrepresentable_expiration_never_expires() {
    let cache = AnswerCache::new(AnswerCacheConfig {
        default_ttl: Duration::from_secs(u64::MAX),
        ..Default::default()
    });
    let now = Instant::now();
    let records = vec![a("example.com.", 0, [10, 0, 0, 1])];

    cache.insert_at(&query("example.com."), records.clone(), now);

    assert_eq!(
        cache.get_at(&query("example.com."), now + Duration::from_secs(86_400)),
        Some(records)
    );
    assert_eq!(cache.sweep_expired_at(now + Duration::from_secs(86_400)), 0);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_keys_distinguish_type() {
    let cache = cache_with_policy(CacheTtlPolicy::First);

    cache.insert(&query("example.com."), vec![a("example.com.", 60, [10, 0, 0, 1])]);

    assert!(cache
        .get(&DnsQuery::new("example.com.", RecordType::AAAA))
        .is_none());
    assert!(cache.get(&query("example.com.")).is_some());
}

#[test]
fn test_sweep_removes_only_expired_entries() {
    let cache = cache_with_policy(CacheTtlPolicy::First);
    let now = Instant::now();

    cache.insert_at(
        &query("short.example.com."),
        vec![a("short.example.com.", 10, [10, 0, 0, 1])],
        now,
    );
    cache.insert_at(
        &query("long.example.com."),
        vec![a("long.example.com.", 600, [10, 0, 0, 2])],
        now,
    );

    let removed = cache.sweep_expired_at(now + Duration::from_secs(30));

    assert_eq!(removed, 1);
    assert_eq!(cache.len(), 1);
    assert!(cache
        .get_at(&query("long.example.com."), now + Duration::from_secs(30))
        .is_some());

    let snapshot = cache.metrics_snapshot();
    assert_eq!(snapshot.expirations, 1);
    assert_eq!(snapshot.sweeps, 1);
}

#[test]
fn test_metrics_count_hits_and_misses() {
    let cache = cache_with_policy(CacheTtlPolicy::First);

    cache.get(&query("example.com."));
    cache.insert(&query("example.com."), vec![a("example.com.", 60, [10, 0, 0, 1])]);
    cache.get(&query("example.com."));
    cache.get(&query("example.com."));

    let snapshot = cache.metrics_snapshot();
    assert_eq!(snapshot.hits, 2);
    assert_eq!(snapshot.misses, 1);
    assert_eq!(snapshot.insertions, 1);
    assert_eq!(snapshot.total_entries, 1);
}

#[test]
fn test_remove_and_clear() {
    let cache = cache_with_policy(CacheTtlPolicy::First);
    cache.insert(&query("a.example.com."), vec![a("a.example.com.", 60, [10, 0, 0, 1])]);
    cache.insert(&query("b.example.com."), vec![a("b.example.com.", 60, [10, 0, 0, 2])]);

    assert!(cache.remove(&query("a.example.com.")));
    assert!(!cache.remove(&query("a.example.com.")));
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}

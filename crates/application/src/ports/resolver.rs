use zonedns_domain::{DnsQuery, RecordSet};

/// Answers a single question from authoritative data.
///
/// Resolution is synchronous and never fails: a question that cannot be
/// answered yields an empty set. Implementations are shared across request
/// tasks, so they must be `Send + Sync`.
pub trait Resolver: Send + Sync {
    fn resolve(&self, query: &DnsQuery) -> RecordSet;
}

use super::super::cache::AnswerCache;
use std::sync::Arc;
use tracing::debug;
use zonedns_application::ports::Resolver;
use zonedns_domain::{DnsQuery, RecordSet};

/// Decorates a [`Resolver`] with the answer cache.
///
/// Non-empty answers are stored under the question they answered; empty
/// answers always fall through to the inner resolver.
pub struct CachedResolver {
    inner: Arc<dyn Resolver>,
    cache: Arc<AnswerCache>,
}

impl CachedResolver {
    pub fn new(inner: Arc<dyn Resolver>, cache: Arc<AnswerCache>) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &Arc<AnswerCache> {
        &self.cache
    }
}

impl Resolver for CachedResolver {
    fn resolve(&self, query: &DnsQuery) -> RecordSet {
        if let Some(records) = self.cache.get(query) {
            debug!(
                name = %query.name,
                record_type = %query.record_type,
                "Cache HIT"
            );
            return records;
        }

        let records = self.inner.resolve(query);
        if !records.is_empty() {
            self.cache.insert(query, records.clone());
        }

        records
    }
}

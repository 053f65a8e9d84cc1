use crate::ports::{DnsAnswer, DnsProvider, Resolver};
use std::sync::Arc;
use tracing::debug;
use zonedns_domain::DnsRequest;

/// Provider backed by a [`Resolver`]: either a plain zone or a cached one.
pub struct ResolverProvider {
    name: String,
    resolver: Arc<dyn Resolver>,
}

impl ResolverProvider {
    pub fn new(name: impl Into<String>, resolver: Arc<dyn Resolver>) -> Self {
        Self {
            name: name.into(),
            resolver,
        }
    }
}

impl DnsProvider for ResolverProvider {
    fn serve(&self, request: &DnsRequest) -> DnsAnswer {
        let mut records = Vec::new();

        for query in &request.queries {
            let answer = self.resolver.resolve(query);
            if answer.is_empty() {
                debug!(provider = %self.name, query = %query, "No records for question");
                continue;
            }
            records.extend(answer);
        }

        DnsAnswer::new(records)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use super::ProviderChain;
use crate::ports::DnsProvider;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::info;
use zonedns_domain::dns_name::{fqdn, ROOT};

/// Maps zone patterns to provider chains.
///
/// A name is routed to the chain of the longest registered pattern that
/// equals it or encloses it on a label boundary; `.` catches everything else.
#[derive(Default)]
pub struct ZoneRouter {
    chains: FxHashMap<String, ProviderChain>,
}

impl ZoneRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `provider` to the chain for `pattern`, creating the chain on first use.
    pub fn add_provider(&mut self, pattern: &str, provider: Arc<dyn DnsProvider>) {
        let pattern = fqdn(pattern).to_lowercase();
        info!(pattern = %pattern, provider = provider.name(), "Registering DNS provider");
        self.chains
            .entry(pattern)
            .or_default()
            .add_provider(provider);
    }

    pub fn route(&self, name: &str) -> Option<&ProviderChain> {
        let name = fqdn(name).to_lowercase();
        let mut candidate = name.as_str();

        loop {
            if let Some(chain) = self.chains.get(candidate) {
                return Some(chain);
            }
            match candidate.find('.') {
                Some(idx) if idx + 1 < candidate.len() => candidate = &candidate[idx + 1..],
                _ => break,
            }
        }

        self.chains.get(ROOT)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.chains.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

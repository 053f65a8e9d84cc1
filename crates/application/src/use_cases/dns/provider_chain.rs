use crate::ports::{DnsAnswer, DnsProvider};
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::debug;
use zonedns_domain::DnsRequest;

/// Ordered providers for one zone pattern.
///
/// The first provider that answers anything wins the whole request; the
/// rest of the chain is not consulted, even for questions the winner left
/// unanswered.
#[derive(Default)]
pub struct ProviderChain {
    providers: SmallVec<[Arc<dyn DnsProvider>; 2]>,
}

impl ProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_provider(&mut self, provider: Arc<dyn DnsProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn serve(&self, request: &DnsRequest) -> DnsAnswer {
        for provider in &self.providers {
            let answer = provider.serve(request);
            if answer.is_answered() {
                debug!(
                    provider = provider.name(),
                    answers = answer.len(),
                    "Provider answered request"
                );
                return answer;
            }
        }

        DnsAnswer::empty()
    }
}

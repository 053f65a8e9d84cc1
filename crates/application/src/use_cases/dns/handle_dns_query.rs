use super::ZoneRouter;
use crate::ports::DnsAnswer;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use zonedns_domain::DnsRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// A zone claimed the request. The answer may still be empty.
    Answer(DnsAnswer),
    /// No registered pattern covers the request's name.
    NotAuthoritative,
}

pub struct HandleDnsQueryUseCase {
    router: Arc<ZoneRouter>,
}

impl HandleDnsQueryUseCase {
    pub fn new(router: Arc<ZoneRouter>) -> Self {
        Self { router }
    }

    pub fn execute(&self, request: &DnsRequest) -> QueryOutcome {
        let start = Instant::now();

        let Some(name) = request.primary_name() else {
            return QueryOutcome::NotAuthoritative;
        };

        let Some(chain) = self.router.route(name) else {
            debug!(name = %name, client = %request.client_ip, "No zone for request");
            return QueryOutcome::NotAuthoritative;
        };

        let answer = chain.serve(request);

        debug!(
            name = %name,
            questions = request.queries.len(),
            answers = answer.len(),
            client = %request.client_ip,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Request resolved"
        );

        QueryOutcome::Answer(answer)
    }
}

mod handle_dns_query;
mod provider_chain;
mod zone_router;

pub use handle_dns_query::{HandleDnsQueryUseCase, QueryOutcome};
pub use provider_chain::ProviderChain;
pub use zone_router::ZoneRouter;

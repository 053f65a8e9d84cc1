pub mod dns;

pub use dns::{HandleDnsQueryUseCase, ProviderChain, QueryOutcome, ZoneRouter};

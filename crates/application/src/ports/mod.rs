mod cache_maintenance_port;
mod dns_provider;
mod resolver;

pub use cache_maintenance_port::{CacheMaintenancePort, CacheSweepOutcome};
pub use dns_provider::{DnsAnswer, DnsProvider};
pub use resolver::Resolver;

pub use zonedns_domain::{DnsQuery, DnsRequest};

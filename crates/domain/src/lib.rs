//! zonedns domain layer: records, queries, names and configuration.
pub mod config;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod errors;

pub use config::{
    CacheConfig, CacheTtlPolicy, CliOverrides, Config, ConfigError, LogFormat, LoggingConfig,
    ServerConfig, ZoneConfig, ZoneRecordConfig,
};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsClass, RecordData, RecordSet, RecordType, ResourceRecord, SoaData};
pub use dns_request::DnsRequest;
pub use errors::DomainError;

pub mod cache;
pub mod cache_maintenance;
pub mod conversion;
pub mod resolver;
pub mod server;
pub mod zone;

pub use cache::{AnswerCache, AnswerCacheConfig, CacheKey, CacheMetrics, CacheMetricsSnapshot};
pub use cache_maintenance::AnswerCacheMaintenance;
pub use conversion::{RecordBuilder, RecordTypeMapper};
pub use resolver::CachedResolver;
pub use server::DnsServerHandler;
pub use zone::{wildcard_candidates, Zone, ZoneResolver};

pub mod key;
pub mod metrics;
pub mod record;
pub mod storage;
mod sweep;

pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use record::CachedAnswer;
pub use storage::{AnswerCache, AnswerCacheConfig};

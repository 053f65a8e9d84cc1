mod cache;
mod errors;
mod logging;
mod root;
mod server;
mod zone;

pub use cache::{CacheConfig, CacheTtlPolicy};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use zone::{ZoneConfig, ZoneRecordConfig};

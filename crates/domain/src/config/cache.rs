use serde::{Deserialize, Serialize};

/// Largest TTL a DNS record can carry (2^31 - 1 seconds).
pub const MAX_TTL_SECS: u64 = i32::MAX as u64;

/// Which record's TTL decides how long an answer stays cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheTtlPolicy {
    /// TTL of the first record in the answer.
    #[default]
    First,
    /// Lowest TTL across the whole answer.
    Minimum,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Expiration used when an answer's TTL is zero.
    #[serde(default = "default_ttl_secs")]
    pub default_ttl_secs: u64,

    /// How often expired entries are swept out of each cache.
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,

    #[serde(default)]
    pub ttl_policy: CacheTtlPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
            ttl_policy: CacheTtlPolicy::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ttl_secs() -> u64 {
    2 * 60 * 60
}

fn default_sweep_interval_secs() -> u64 {
    10 * 60
}

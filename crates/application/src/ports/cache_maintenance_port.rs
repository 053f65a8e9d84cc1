use async_trait::async_trait;
use zonedns_domain::DomainError;

/// Outcome of a cache sweep cycle.
#[derive(Debug, Default, Clone)]
pub struct CacheSweepOutcome {
    pub entries_removed: usize,
    pub cache_size: usize,
}

/// Port for answer cache housekeeping, driven by the jobs crate.
#[async_trait]
pub trait CacheMaintenancePort: Send + Sync {
    /// Remove entries whose expiration has passed.
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError>;
}

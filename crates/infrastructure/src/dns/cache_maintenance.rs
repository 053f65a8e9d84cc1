use super::cache::AnswerCache;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use zonedns_application::ports::{CacheMaintenancePort, CacheSweepOutcome};
use zonedns_domain::DomainError;

/// Infrastructure adapter implementing `CacheMaintenancePort`.
pub struct AnswerCacheMaintenance {
    cache: Arc<AnswerCache>,
}

impl AnswerCacheMaintenance {
    pub fn new(cache: Arc<AnswerCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CacheMaintenancePort for AnswerCacheMaintenance {
    async fn run_sweep_cycle(&self) -> Result<CacheSweepOutcome, DomainError> {
        let cache_for_sweep = Arc::clone(&self.cache);
        let removed = tokio::task::spawn_blocking(move || cache_for_sweep.sweep_expired())
            .await
            .map_err(|e| {
                debug!(error = %e, "Sweep task panicked");
                DomainError::CacheMaintenance(e.to_string())
            })?;

        Ok(CacheSweepOutcome {
            entries_removed: removed,
            cache_size: self.cache.len(),
        })
    }
}

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use zonedns_application::ports::CacheMaintenancePort;

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 600;

/// Periodically drops expired entries from one answer cache.
pub struct CacheSweepJob {
    label: String,
    maintenance: Arc<dyn CacheMaintenancePort>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(label: impl Into<String>, maintenance: Arc<dyn CacheMaintenancePort>) -> Self {
        Self {
            label: label.into(),
            maintenance,
            interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval_secs(self, secs: u64) -> Self {
        self.with_interval(Duration::from_secs(secs))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            zone = %self.label,
            interval_secs = self.interval.as_secs(),
            "Starting cache sweep job"
        );

        let job = Arc::clone(&self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(job.interval);
            // The first tick completes immediately; nothing can have expired yet.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = job.shutdown.cancelled() => {
                        info!(zone = %job.label, "CacheSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match job.maintenance.run_sweep_cycle().await {
                            Ok(outcome) if outcome.entries_removed > 0 => {
                                info!(
                                    zone = %job.label,
                                    entries_removed = outcome.entries_removed,
                                    cache_size = outcome.cache_size,
                                    "Cache sweep cycle completed"
                                );
                            }
                            Ok(outcome) => {
                                debug!(
                                    zone = %job.label,
                                    cache_size = outcome.cache_size,
                                    "Cache sweep found nothing to remove"
                                );
                            }
                            Err(e) => {
                                error!(zone = %job.label, error = %e, "Cache sweep cycle failed");
                            }
                        }
                    }
                }
            }
        });
    }
}

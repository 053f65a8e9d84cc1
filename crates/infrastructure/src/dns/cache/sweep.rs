use super::storage::AnswerCache;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::time::Instant;
use tracing::debug;

impl AnswerCache {
    /// Drops every entry whose expiration has passed. Returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, answer| !answer.is_expired_at(now));
        let removed = before.saturating_sub(self.entries.len());

        self.metrics.sweeps.fetch_add(1, AtomicOrdering::Relaxed);
        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);

            debug!(
                removed,
                cache_size = self.entries.len(),
                "Cache sweep completed"
            );
        }

        removed
    }
}

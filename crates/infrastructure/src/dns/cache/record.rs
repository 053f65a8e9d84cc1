use std::time::{Duration, Instant};
use zonedns_domain::RecordSet;

/// A resolved answer and the instant it stops being served.
#[derive(Debug, Clone)]
pub struct CachedAnswer {
    pub records: RecordSet,
    /// `None` when `now + ttl` is past what `Instant` can represent; such
    /// an entry never expires.
    pub expires_at: Option<Instant>,
}

impl CachedAnswer {
    pub fn new(records: RecordSet, ttl: Duration, now: Instant) -> Self {
        Self {
            records,
            expires_at: now.checked_add(ttl),
        }
    }

    #[inline]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

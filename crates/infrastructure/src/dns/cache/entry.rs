use linktracer_domain::AnalysisResult;
use std::time::Instant;

/// A cached result and the instant after which it is stale.
///
/// `expires_at` is `None` when the TTL reaches past what `Instant` can
/// represent; such an entry never goes stale.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub result: AnalysisResult,
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    pub fn new(result: AnalysisResult, expires_at: Option<Instant>) -> Self {
        Self { result, expires_at }
    }

    /// Valid up to and including `expires_at`.
    #[inline]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}

use super::clock::{Clock, SystemClock};
use super::entry::CacheEntry;
use dashmap::DashMap;
use linktracer_application::ports::AnalysisCache;
use linktracer_domain::AnalysisResult;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// In-memory analysis cache with fixed-TTL, lazily checked expiry.
///
/// Entries are sharded in a `DashMap`, so a reader holds the shard lock for
/// the duration of one clone and never sees a half-written entry. Expired
/// entries stay in place until overwritten or purged.
pub struct InMemoryAnalysisCache {
    entries: DashMap<String, CacheEntry>,
    clock: Arc<dyn Clock>,
}

impl InMemoryAnalysisCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Drop expired entries now. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            debug!(removed, remaining = self.entries.len(), "Purged expired entries");
        }
        removed
    }
}

impl Default for InMemoryAnalysisCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisCache for InMemoryAnalysisCache {
    fn lookup(&self, key: &str) -> Option<AnalysisResult> {
        let entry = self.entries.get(key)?;
        if entry.is_expired(self.clock.now()) {
            debug!(domain = %key, "Cache entry expired");
            return None;
        }
        Some(entry.result.clone())
    }

    fn store(&self, key: &str, result: AnalysisResult, ttl: Duration) {
        let expires_at = self.clock.now().checked_add(ttl);
        self.entries
            .insert(key.to_string(), CacheEntry::new(result, expires_at));
        debug!(domain = %key, ttl_secs = ttl.as_secs(), "Cached analysis result");
    }
}

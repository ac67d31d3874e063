use linktracer_application::ports::AnalysisCache;
use linktracer_domain::AnalysisResult;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimal cache double that counts stores.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (AnalysisResult, Option<Instant>)>>,
    stores: Mutex<usize>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store_count(&self) -> usize {
        *self.stores.lock().unwrap()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }
}

impl AnalysisCache for MemoryCache {
    fn lookup(&self, key: &str) -> Option<AnalysisResult> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(key)
            .filter(|(_, expires_at)| expires_at.is_none_or(|at| Instant::now() <= at))
            .map(|(result, _)| result.clone())
    }

    fn store(&self, key: &str, result: AnalysisResult, ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (result, Instant::now().checked_add(ttl)));
        *self.stores.lock().unwrap() += 1;
    }
}

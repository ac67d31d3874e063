use crate::dns_record::DomainRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated outcome of one domain analysis.
///
/// Records are grouped by type in fan-out order (A, AAAA, MX, TXT). The
/// cache hands out clones, never references into its own storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub records: Vec<DomainRecord>,
    pub similarity: f64,
    pub last_updated: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(records: Vec<DomainRecord>, similarity: f64) -> Self {
        Self {
            records,
            similarity,
            last_updated: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

use super::RecordType;
use std::sync::Arc;

/// One question sent to a nameserver: the domain and the record type asked for.
///
/// The analyzer allocates the domain once per call; each per-type query holds
/// a clone of that `Arc<str>`.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }
}

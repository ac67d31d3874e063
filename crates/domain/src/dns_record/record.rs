use super::RecordType;
use serde::{Deserialize, Serialize};

/// A single normalised answer produced by the record resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Owner name as returned by the nameserver
    pub name: String,
    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Textual value: address, mail exchange host or joined TXT strings
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// MX preference, 0 for every other type
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: u16,
}

fn is_zero(priority: &u16) -> bool {
    *priority == 0
}

impl DomainRecord {
    /// Create a new record without priority
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        value: impl Into<String>,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            value: value.into(),
            ttl,
            priority: 0,
        }
    }

    /// Create an MX record carrying its preference
    pub fn mail_exchange(
        name: impl Into<String>,
        exchange: impl Into<String>,
        preference: u16,
        ttl: u32,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::MX,
            value: exchange.into(),
            ttl,
            priority: preference,
        }
    }
}

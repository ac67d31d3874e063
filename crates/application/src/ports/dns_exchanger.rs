use crate::context::QueryContext;
use async_trait::async_trait;
use linktracer_domain::{DnsQuery, ExchangeError};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-specific payload of an answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    MX { preference: u16, exchange: String },
    /// Character strings of a TXT record, in wire order
    TXT(Vec<String>),
    /// Any other type present in the answer section (e.g. a CNAME link)
    Other(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,
    pub ttl: u32,
    pub data: AnswerData,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: AnswerData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }
}

/// One query of one type against one nameserver.
///
/// Implementations must give up when `ctx` is done. Any error means "this
/// server did not answer"; an empty `Ok` is a valid answer.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        ctx: &QueryContext,
        query: &DnsQuery,
        server: &str,
    ) -> Result<Vec<AnswerRecord>, ExchangeError>;
}

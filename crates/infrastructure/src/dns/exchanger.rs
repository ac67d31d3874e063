use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{tcp::TcpTransport, udp::UdpTransport, Transport};
use async_trait::async_trait;
use linktracer_application::ports::{AnswerRecord, DnsExchanger};
use linktracer_application::QueryContext;
use linktracer_domain::{DnsQuery, ExchangeError};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// Budget granted to the TCP retry when UDP already used up the timeout.
const MIN_TCP_RETRY_BUDGET: Duration = Duration::from_millis(500);

/// `DnsExchanger` speaking the DNS wire protocol directly.
///
/// Queries go out over UDP; a truncated answer is retried over TCP against
/// the same server. Every exchange is bounded by the configured timeout and
/// by the caller's context, whichever ends first.
pub struct HickoryExchanger {
    timeout: Duration,
}

impl HickoryExchanger {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exchange_with(
        &self,
        query: &DnsQuery,
        addr: SocketAddr,
        server: &str,
    ) -> Result<Vec<AnswerRecord>, ExchangeError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query(&query.domain, &query.record_type)?;

        let udp = Transport::Udp(UdpTransport::new(addr));
        let response = udp.send(&query_bytes, self.timeout).await?;
        let mut protocol = response.protocol_used;
        let mut parsed = Self::parse_matching(&response.bytes, id, server)?;

        if parsed.truncated {
            debug!(
                server = %server,
                domain = %query.domain,
                from = udp.protocol_name(),
                "Response truncated (TC bit), retrying via TCP"
            );

            let remaining = self
                .timeout
                .checked_sub(start.elapsed())
                .unwrap_or(MIN_TCP_RETRY_BUDGET);

            let tcp = Transport::Tcp(TcpTransport::new(addr));
            let response = tcp.send(&query_bytes, remaining).await?;
            protocol = response.protocol_used;
            parsed = Self::parse_matching(&response.bytes, id, server)?;
        }

        debug!(
            server = %server,
            domain = %query.domain,
            record_type = %query.record_type,
            protocol = protocol,
            answers = parsed.answers.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Exchange completed"
        );

        Ok(parsed.answers)
    }

    fn parse_matching(bytes: &[u8], id: u16, server: &str) -> Result<DnsResponse, ExchangeError> {
        let parsed = ResponseParser::parse(bytes, server)?;
        if parsed.id != id {
            return Err(ExchangeError::IdMismatch {
                expected: id,
                received: parsed.id,
            });
        }
        Ok(parsed)
    }
}

#[async_trait]
impl DnsExchanger for HickoryExchanger {
    async fn exchange(
        &self,
        ctx: &QueryContext,
        query: &DnsQuery,
        server: &str,
    ) -> Result<Vec<AnswerRecord>, ExchangeError> {
        if let Some(err) = ctx.err() {
            return Err(ExchangeError::Aborted(err));
        }

        let addr: SocketAddr = server.parse().map_err(|e: std::net::AddrParseError| {
            ExchangeError::InvalidServer {
                server: server.to_string(),
                reason: e.to_string(),
            }
        })?;

        tokio::select! {
            biased;
            err = ctx.done() => Err(ExchangeError::Aborted(err)),
            result = self.exchange_with(query, addr, server) => result,
        }
    }
}

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use linktracer_domain::ExchangeError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP (RFC 1035 §4.2.2): every message carries a 2-byte length prefix.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn round_trip(&self, message_bytes: &[u8]) -> Result<Vec<u8>, std::io::Error> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "DNS message too large for TCP")
        })?;

        let mut stream = TcpStream::connect(self.server_addr).await?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&len.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        stream.write_all(&framed).await?;

        let mut len_buf = [0u8; 2];
        stream.read_exact(&mut len_buf).await?;
        let response_len = u16::from_be_bytes(len_buf) as usize;

        let mut response = vec![0u8; response_len];
        stream.read_exact(&mut response).await?;

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, ExchangeError> {
        let bytes = tokio::time::timeout(timeout, self.round_trip(message_bytes))
            .await
            .map_err(|_| ExchangeError::Timeout {
                server: self.server_addr.to_string(),
            })?
            .map_err(|e| ExchangeError::Io {
                server: self.server_addr.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

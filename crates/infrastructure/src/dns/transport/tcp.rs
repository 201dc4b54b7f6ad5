use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_librarian_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport (RFC 1035 §4.2.2, two-byte length prefix).
///
/// Used when a UDP answer comes back truncated. One connection per query.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let length = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::IoError(format!(
                "DNS message of {} bytes is too large for TCP",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| io_error(self.server_addr, "connect to", e))?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&length.to_be_bytes());
        framed.extend_from_slice(message_bytes);

        stream
            .write_all(&framed)
            .await
            .map_err(|e| io_error(self.server_addr, "send TCP query to", e))?;

        debug!(server = %self.server_addr, bytes_sent = framed.len(), "TCP query sent");

        let response_len = stream
            .read_u16()
            .await
            .map_err(|e| io_error(self.server_addr, "read TCP length from", e))?;

        let mut response = vec![0u8; response_len as usize];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| io_error(self.server_addr, "read TCP response from", e))?;

        debug!(
            server = %self.server_addr,
            bytes_received = response.len(),
            "TCP response received"
        );

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| timeout_error(self.server_addr))??;

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

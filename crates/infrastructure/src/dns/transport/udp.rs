use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dns_librarian_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport. Binds a fresh ephemeral socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| io_error(self.server_addr, "bind UDP socket for", e))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| timeout_error(self.server_addr))?
                .map_err(|e| io_error(self.server_addr, "send UDP query to", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let deadline = Instant::now() + timeout;
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        // Datagrams from any other source are dropped until the deadline
        let bytes_received = loop {
            let (len, from_addr) = tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| timeout_error(self.server_addr))?
                .map_err(|e| io_error(self.server_addr, "receive UDP response from", e))?;

            if from_addr == self.server_addr {
                break len;
            }

            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "Dropping UDP datagram from unexpected source"
            );
        };

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use dns_librarian_application::ports::LivenessProbe;
use dns_librarian_domain::{DomainError, RecordType, ResolverAddress};
use std::time::Duration;
use tracing::debug;

/// Reachability check for a candidate resolver: a root NS query over UDP.
///
/// Any well-formed reply counts, whatever its response code.
pub struct DnsLivenessProbe {
    timeout: Duration,
    port: u16,
}

impl DnsLivenessProbe {
    pub fn new(probe_timeout_ms: u64, port: u16) -> Self {
        Self {
            timeout: Duration::from_millis(probe_timeout_ms),
            port,
        }
    }
}

#[async_trait]
impl LivenessProbe for DnsLivenessProbe {
    async fn probe(&self, resolver: ResolverAddress) -> Result<(), DomainError> {
        let server = resolver.socket_addr(self.port);
        let (id, query) = MessageBuilder::build_query_with_id(".", &RecordType::NS)?;

        let response = Transport::udp(server).send(&query, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Probe reply from {} carried ID {} instead of {}",
                server, parsed.id, id
            )));
        }

        debug!(resolver = %resolver, rcode = %parsed.raw.response_code, "Resolver is alive");
        Ok(())
    }
}

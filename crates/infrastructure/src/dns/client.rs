use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::Transport;
use async_trait::async_trait;
use bytes::Bytes;
use dns_librarian_application::ports::DnsClient;
use dns_librarian_domain::config::QueryConfig;
use dns_librarian_domain::{DomainError, DomainName, RawResponse, RecordType, ResolverAddress};
use std::net::IpAddr;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Stub-resolver client speaking plain DNS to one resolver per call.
///
/// Queries go out over UDP; a truncated answer is retried over TCP within
/// whatever is left of the per-query timeout.
pub struct HickoryDnsClient {
    timeout: Duration,
    port: u16,
    tcp_fallback: bool,
}

impl HickoryDnsClient {
    pub fn new(query_timeout_ms: u64, port: u16) -> Self {
        Self {
            timeout: Duration::from_millis(query_timeout_ms),
            port,
            tcp_fallback: true,
        }
    }

    pub fn from_config(config: &QueryConfig) -> Self {
        Self::new(config.timeout, config.port).with_tcp_fallback(config.tcp_fallback)
    }

    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }

    /// Send one query of `record_type` for `name` and return the parsed reply.
    pub async fn exchange(
        &self,
        resolver: ResolverAddress,
        name: &str,
        record_type: &RecordType,
    ) -> Result<RawResponse, DomainError> {
        let deadline = Instant::now() + self.timeout;
        let server = resolver.socket_addr(self.port);
        let (id, query) = MessageBuilder::build_query_with_id(name, record_type)?;

        let udp = Transport::udp(server);
        let response = udp.send(&query, self.timeout).await?;
        let parsed = Self::parse_matching(id, response.bytes)?;

        debug!(
            server = %server,
            protocol = response.protocol_used,
            record_type = %record_type,
            rcode = %parsed.raw.response_code,
            "Query answered"
        );

        if !parsed.truncated || !self.tcp_fallback {
            return Ok(parsed.raw);
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            warn!(server = %server, "Truncated UDP answer and no time left for TCP");
            return Ok(parsed.raw);
        }

        let tcp = Transport::tcp(server);
        debug!(
            server = %server,
            from = udp.protocol_name(),
            to = tcp.protocol_name(),
            "Answer truncated, retrying"
        );

        match tcp.send(&query, remaining).await {
            Ok(response) => Ok(Self::parse_matching(id, response.bytes)?.raw),
            Err(e) => {
                warn!(
                    server = %server,
                    error = %e,
                    "TCP retry failed, using truncated UDP answer"
                );
                Ok(parsed.raw)
            }
        }
    }

    fn parse_matching(expected_id: u16, bytes: Vec<u8>) -> Result<DnsResponse, DomainError> {
        let parsed = ResponseParser::parse_bytes(Bytes::from(bytes))?;
        if parsed.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                parsed.id, expected_id
            )));
        }
        Ok(parsed)
    }
}

fn addresses_of(response: &RawResponse) -> Vec<IpAddr> {
    response
        .answers
        .iter()
        .filter_map(|answer| answer.data.ip_address())
        .collect()
}

#[async_trait]
impl DnsClient for HickoryDnsClient {
    async fn query_any(
        &self,
        resolver: ResolverAddress,
        domain: &DomainName,
    ) -> Result<RawResponse, DomainError> {
        self.exchange(resolver, &domain.to_fqdn(), &RecordType::ANY)
            .await
    }

    async fn lookup_addresses(
        &self,
        resolver: ResolverAddress,
        domain: &DomainName,
    ) -> Result<Vec<IpAddr>, DomainError> {
        let name = domain.to_fqdn();
        let (v4, v6) = tokio::join!(
            self.exchange(resolver, &name, &RecordType::A),
            self.exchange(resolver, &name, &RecordType::AAAA)
        );

        match (v4, v6) {
            (Err(e), Err(_)) => Err(e),
            (v4, v6) => {
                let mut addresses = Vec::new();
                for response in [v4, v6].into_iter().flatten() {
                    addresses.extend(addresses_of(&response));
                }
                debug!(
                    domain = %domain,
                    resolver = %resolver,
                    addresses = addresses.len(),
                    "Forward lookup complete"
                );
                Ok(addresses)
            }
        }
    }
}

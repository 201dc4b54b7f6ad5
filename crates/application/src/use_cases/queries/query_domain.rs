use crate::ports::DnsClient;
use dns_librarian_domain::{
    CollatedRecords, DomainError, DomainName, RawResponse, ResolverAddress, ResponseCode,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of a domain query together with the resolver that produced it
#[derive(Debug, Clone)]
pub struct ResolvedDomain {
    pub resolver: ResolverAddress,
    pub response_code: ResponseCode,
    pub records: CollatedRecords,
}

struct Attempt {
    resolver: ResolverAddress,
    response: RawResponse,
    addresses: Vec<IpAddr>,
}

/// Use case: query a domain through an ordered resolver list with failover.
///
/// Resolvers are tried strictly one after another. Per-resolver faults are
/// logged and skipped; the first NOERROR response ends the loop.
pub struct QueryDomainUseCase {
    client: Arc<dyn DnsClient>,
    stop_on_nxdomain: bool,
}

impl QueryDomainUseCase {
    pub fn new(client: Arc<dyn DnsClient>) -> Self {
        Self {
            client,
            stop_on_nxdomain: false,
        }
    }

    pub fn with_stop_on_nxdomain(mut self, enabled: bool) -> Self {
        self.stop_on_nxdomain = enabled;
        self
    }

    pub async fn execute(
        &self,
        domain: &DomainName,
        resolvers: &[ResolverAddress],
    ) -> Result<CollatedRecords, DomainError> {
        self.resolve(domain, resolvers)
            .await
            .map(|resolved| resolved.records)
    }

    pub async fn resolve(
        &self,
        domain: &DomainName,
        resolvers: &[ResolverAddress],
    ) -> Result<ResolvedDomain, DomainError> {
        let mut latest: Option<Attempt> = None;

        for &resolver in resolvers {
            let Some(attempt) = self.attempt(resolver, domain).await else {
                continue;
            };

            let is_final = self.is_final(&attempt.response);
            latest = Some(attempt);
            if is_final {
                break;
            }
        }

        let Attempt {
            resolver,
            response,
            addresses,
        } = latest.ok_or(DomainError::NoValidResponse)?;

        if self.is_final(&response) {
            info!(
                domain = %domain,
                resolver = %resolver,
                rcode = %response.response_code,
                answers = response.answers.len(),
                addresses = addresses.len(),
                "Domain resolved"
            );
        } else {
            warn!(
                domain = %domain,
                resolver = %resolver,
                rcode = %response.response_code,
                "No resolver returned NOERROR, using the last response obtained"
            );
        }

        Ok(ResolvedDomain {
            resolver,
            response_code: response.response_code,
            records: CollatedRecords::collate(&response, addresses),
        })
    }

    /// One resolver's full attempt: ANY query, then the forward lookup. `None`
    /// when the query itself produced no response.
    async fn attempt(&self, resolver: ResolverAddress, domain: &DomainName) -> Option<Attempt> {
        let response = match self.client.query_any(resolver, domain).await {
            Ok(response) => response,
            Err(e) => {
                debug!(domain = %domain, resolver = %resolver, error = %e, "Query failed, trying next resolver");
                return None;
            }
        };

        debug!(
            domain = %domain,
            resolver = %resolver,
            rcode = %response.response_code,
            answers = response.answers.len(),
            "Response received"
        );

        let addresses = match self.client.lookup_addresses(resolver, domain).await {
            Ok(addresses) => addresses,
            Err(e) => {
                debug!(domain = %domain, resolver = %resolver, error = %e, "Address lookup failed");
                Vec::new()
            }
        };

        Some(Attempt {
            resolver,
            response,
            addresses,
        })
    }

    fn is_final(&self, response: &RawResponse) -> bool {
        response.is_success() || (self.stop_on_nxdomain && response.is_nxdomain())
    }
}

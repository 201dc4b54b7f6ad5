use async_trait::async_trait;
use dns_librarian_domain::{DomainError, DomainName, RawResponse, ResolverAddress};
use std::net::IpAddr;

/// DNS protocol capability consumed by the query engine.
#[async_trait]
pub trait DnsClient: Send + Sync {
    /// Send a recursive ANY query for `domain` to `resolver`.
    async fn query_any(
        &self,
        resolver: ResolverAddress,
        domain: &DomainName,
    ) -> Result<RawResponse, DomainError>;

    /// Forward lookup of `domain` (A and AAAA) through `resolver`.
    async fn lookup_addresses(
        &self,
        resolver: ResolverAddress,
        domain: &DomainName,
    ) -> Result<Vec<IpAddr>, DomainError>;
}

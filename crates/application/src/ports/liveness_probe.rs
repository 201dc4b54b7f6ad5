use async_trait::async_trait;
use dns_librarian_domain::{DomainError, ResolverAddress};

/// Reachability check for a candidate resolver.
///
/// `Ok(())` means alive. Implementations bound their own wait; callers treat
/// any error as "not alive".
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    async fn probe(&self, resolver: ResolverAddress) -> Result<(), DomainError>;
}

use crate::ports::{InterfaceInventory, LivenessProbe, NetworkInterface};
use dns_librarian_domain::{DomainError, ResolverAddress};
use futures::future::join_all;
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: find the local IPv4 resolvers that currently answer.
pub struct DiscoverResolversUseCase {
    inventory: Arc<dyn InterfaceInventory>,
    probe: Arc<dyn LivenessProbe>,
    probe_concurrently: bool,
}

impl DiscoverResolversUseCase {
    pub fn new(inventory: Arc<dyn InterfaceInventory>, probe: Arc<dyn LivenessProbe>) -> Self {
        Self {
            inventory,
            probe,
            probe_concurrently: true,
        }
    }

    pub fn with_concurrent_probing(mut self, enabled: bool) -> Self {
        self.probe_concurrently = enabled;
        self
    }

    pub async fn execute(&self) -> Result<Vec<ResolverAddress>, DomainError> {
        let interfaces = match self.inventory.list_interfaces().await {
            Ok(interfaces) => interfaces,
            Err(e) => {
                warn!(error = %e, "Interface inventory unavailable");
                Vec::new()
            }
        };

        let candidates = candidate_addresses(&interfaces);
        debug!(
            interfaces = interfaces.len(),
            candidates = candidates.len(),
            "Resolver candidates collected"
        );

        let alive = self.probe_all(candidates).await;
        if alive.is_empty() {
            return Err(DomainError::NoResolversFound);
        }

        info!(
            resolvers = ?alive.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "Local resolvers discovered"
        );
        Ok(alive)
    }

    /// Keeps candidates whose probe succeeded, in candidate order.
    async fn probe_all(&self, candidates: Vec<ResolverAddress>) -> Vec<ResolverAddress> {
        let verdicts: Vec<bool> = if self.probe_concurrently {
            join_all(candidates.iter().map(|c| self.is_alive(*c))).await
        } else {
            let mut verdicts = Vec::with_capacity(candidates.len());
            for candidate in &candidates {
                verdicts.push(self.is_alive(*candidate).await);
            }
            verdicts
        };

        candidates
            .into_iter()
            .zip(verdicts)
            .filter_map(|(candidate, alive)| alive.then_some(candidate))
            .collect()
    }

    async fn is_alive(&self, candidate: ResolverAddress) -> bool {
        match self.probe.probe(candidate).await {
            Ok(()) => {
                debug!(resolver = %candidate, "Liveness probe succeeded");
                true
            }
            Err(e) => {
                debug!(resolver = %candidate, error = %e, "Liveness probe failed");
                false
            }
        }
    }
}

/// DNS addresses of the interfaces that are up, deduplicated (first
/// occurrence wins) and restricted to IPv4.
pub fn candidate_addresses(interfaces: &[NetworkInterface]) -> Vec<ResolverAddress> {
    let mut seen: HashSet<IpAddr> = HashSet::new();

    interfaces
        .iter()
        .filter(|iface| iface.is_up)
        .flat_map(|iface| iface.dns_servers.iter().copied())
        .filter(|addr| seen.insert(*addr))
        .filter_map(ResolverAddress::from_ip)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_candidates_skip_down_interfaces() {
        let interfaces = vec![
            NetworkInterface::new("eth0", false, vec![ip("10.0.0.1")]),
            NetworkInterface::new("wlan0", true, vec![ip("192.168.1.1")]),
        ];

        let candidates = candidate_addresses(&interfaces);

        assert_eq!(candidates, vec!["192.168.1.1".parse().unwrap()]);
    }

    #[test]
    fn test_candidates_dedupe_and_drop_ipv6() {
        let interfaces = vec![
            NetworkInterface::new("eth0", true, vec![ip("1.1.1.1"), ip("fe80::1")]),
            NetworkInterface::new("eth1", true, vec![ip("1.1.1.1"), ip("8.8.8.8")]),
        ];

        let candidates: Vec<String> = candidate_addresses(&interfaces)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(candidates, vec!["1.1.1.1", "8.8.8.8"]);
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use dns_librarian_application::ports::{
    DnsClient, InterfaceInventory, LivenessProbe, NetworkInterface,
};
use dns_librarian_domain::{
    AnswerRecord, DomainError, DomainName, RawResponse, RecordData, ResolverAddress, ResponseCode,
};
use std::collections::{HashMap, HashSet};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub fn resolver(s: &str) -> ResolverAddress {
    s.parse().unwrap()
}

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

pub fn a_record(name: &str, addr: [u8; 4]) -> AnswerRecord {
    AnswerRecord::new(name, 300, RecordData::A(Ipv4Addr::from(addr)))
}

pub fn noerror(answers: Vec<AnswerRecord>) -> RawResponse {
    RawResponse::new(ResponseCode::NoError, answers)
}

// ============================================================================
// Mock InterfaceInventory
// ============================================================================

pub struct MockInterfaceInventory {
    interfaces: Vec<NetworkInterface>,
    should_fail: bool,
}

impl MockInterfaceInventory {
    pub fn new(interfaces: Vec<NetworkInterface>) -> Self {
        Self {
            interfaces,
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            interfaces: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl InterfaceInventory for MockInterfaceInventory {
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        if self.should_fail {
            return Err(DomainError::InterfaceInventory("mock failure".into()));
        }
        Ok(self.interfaces.clone())
    }
}

// ============================================================================
// Mock LivenessProbe
// ============================================================================

/// Alive set plus optional per-address delays, so tests can make probes
/// complete out of order.
pub struct MockLivenessProbe {
    alive: HashSet<ResolverAddress>,
    delays_ms: HashMap<ResolverAddress, u64>,
    probed: Mutex<Vec<ResolverAddress>>,
}

impl MockLivenessProbe {
    pub fn alive(addresses: &[&str]) -> Self {
        Self {
            alive: addresses.iter().map(|a| resolver(a)).collect(),
            delays_ms: HashMap::new(),
            probed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, address: &str, delay_ms: u64) -> Self {
        self.delays_ms.insert(resolver(address), delay_ms);
        self
    }

    pub async fn probed(&self) -> Vec<ResolverAddress> {
        self.probed.lock().await.clone()
    }
}

#[async_trait]
impl LivenessProbe for MockLivenessProbe {
    async fn probe(&self, address: ResolverAddress) -> Result<(), DomainError> {
        self.probed.lock().await.push(address);

        if let Some(delay) = self.delays_ms.get(&address) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }

        if self.alive.contains(&address) {
            Ok(())
        } else {
            Err(DomainError::TransportTimeout {
                server: address.to_string(),
            })
        }
    }
}

// ============================================================================
// Mock DnsClient
// ============================================================================

#[derive(Clone)]
pub enum ResolverBehavior {
    /// Query fails (timeout)
    Fail,
    /// Query returns this response, lookup returns these addresses
    Respond(RawResponse, Vec<IpAddr>),
    /// Query returns this response, lookup fails
    RespondLookupFails(RawResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    Query(ResolverAddress),
    Lookup(ResolverAddress),
}

#[derive(Clone)]
pub struct MockDnsClient {
    behaviors: Arc<HashMap<ResolverAddress, ResolverBehavior>>,
    calls: Arc<Mutex<Vec<ClientCall>>>,
}

impl MockDnsClient {
    pub fn new(behaviors: Vec<(&str, ResolverBehavior)>) -> Self {
        Self {
            behaviors: Arc::new(
                behaviors
                    .into_iter()
                    .map(|(addr, behavior)| (resolver(addr), behavior))
                    .collect(),
            ),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn calls(&self) -> Vec<ClientCall> {
        self.calls.lock().await.clone()
    }

    pub async fn queried(&self) -> Vec<ResolverAddress> {
        self.calls
            .lock()
            .await
            .iter()
            .filter_map(|c| match c {
                ClientCall::Query(r) => Some(*r),
                ClientCall::Lookup(_) => None,
            })
            .collect()
    }

    fn behavior(&self, resolver: &ResolverAddress) -> ResolverBehavior {
        self.behaviors
            .get(resolver)
            .cloned()
            .unwrap_or(ResolverBehavior::Fail)
    }
}

#[async_trait]
impl DnsClient for MockDnsClient {
    async fn query_any(
        &self,
        resolver: ResolverAddress,
        _domain: &DomainName,
    ) -> Result<RawResponse, DomainError> {
        self.calls.lock().await.push(ClientCall::Query(resolver));

        match self.behavior(&resolver) {
            ResolverBehavior::Fail => Err(DomainError::TransportTimeout {
                server: resolver.to_string(),
            }),
            ResolverBehavior::Respond(response, _) | ResolverBehavior::RespondLookupFails(response) => {
                Ok(response)
            }
        }
    }

    async fn lookup_addresses(
        &self,
        resolver: ResolverAddress,
        _domain: &DomainName,
    ) -> Result<Vec<IpAddr>, DomainError> {
        self.calls.lock().await.push(ClientCall::Lookup(resolver));

        match self.behavior(&resolver) {
            ResolverBehavior::Respond(_, addresses) => Ok(addresses),
            _ => Err(DomainError::TransportConnectionRefused {
                server: resolver.to_string(),
            }),
        }
    }
}

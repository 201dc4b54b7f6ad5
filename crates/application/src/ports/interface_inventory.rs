use async_trait::async_trait;
use dns_librarian_domain::DomainError;
use std::net::IpAddr;

/// Snapshot of one network interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterface {
    pub name: String,
    /// Operational state is "up"
    pub is_up: bool,
    /// DNS servers configured for this interface, in configured order
    pub dns_servers: Vec<IpAddr>,
}

impl NetworkInterface {
    pub fn new(name: impl Into<String>, is_up: bool, dns_servers: Vec<IpAddr>) -> Self {
        Self {
            name: name.into(),
            is_up,
            dns_servers,
        }
    }
}

#[async_trait]
pub trait InterfaceInventory: Send + Sync {
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError>;
}

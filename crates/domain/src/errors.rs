use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unable to find local IPv4 DNS, cannot perform lookups.")]
    NoResolversFound,

    #[error("Unable to get a valid response from the domain, check input.")]
    NoValidResponse,

    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Interface inventory error: {0}")]
    InterfaceInventory(String),
}

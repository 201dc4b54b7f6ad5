use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

/// IPv4 address of a DNS resolver.
///
/// Discovery only ever produces IPv4 resolvers, so the type makes the IPv6
/// exclusion explicit instead of filtering `IpAddr` at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolverAddress(Ipv4Addr);

impl ResolverAddress {
    pub fn new(addr: Ipv4Addr) -> Self {
        Self(addr)
    }

    /// Returns `None` for IPv6 addresses.
    pub fn from_ip(addr: IpAddr) -> Option<Self> {
        match addr {
            IpAddr::V4(v4) => Some(Self(v4)),
            IpAddr::V6(_) => None,
        }
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.0
    }

    pub fn socket_addr(&self, port: u16) -> SocketAddr {
        SocketAddr::from((self.0, port))
    }
}

impl fmt::Display for ResolverAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Ipv4Addr> for ResolverAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr)
    }
}

impl FromStr for ResolverAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Ipv4Addr>()
            .map(Self)
            .map_err(|e| format!("Invalid IPv4 resolver address '{}': {}", s, e))
    }
}

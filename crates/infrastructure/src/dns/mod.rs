pub mod client;
pub mod forwarding;
pub mod probe;
pub mod transport;

pub use client::HickoryDnsClient;
pub use probe::DnsLivenessProbe;

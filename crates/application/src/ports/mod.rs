pub mod dns_client;
pub mod interface_inventory;
pub mod liveness_probe;

pub use dns_client::DnsClient;
pub use interface_inventory::{InterfaceInventory, NetworkInterface};
pub use liveness_probe::LivenessProbe;

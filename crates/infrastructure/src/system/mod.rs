pub mod interface_inventory;

pub use interface_inventory::{LinuxInterfaceInventory, RESOLV_CONF_INTERFACE};

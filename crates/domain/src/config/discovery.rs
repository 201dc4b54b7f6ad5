use serde::{Deserialize, Serialize};

/// Resolver discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Liveness probe timeout in milliseconds (default: 2000)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: u64,

    /// Probe all candidates at once instead of one after another (default: true)
    /// Output order is the discovery order either way.
    #[serde(default = "default_true")]
    pub probe_concurrently: bool,

    /// Global resolver configuration (default: "/etc/resolv.conf")
    #[serde(default = "default_resolv_conf_path")]
    pub resolv_conf_path: String,

    /// Kernel interface directory (default: "/sys/class/net")
    #[serde(default = "default_sys_class_net_path")]
    pub sys_class_net_path: String,

    /// systemd-networkd per-link state directory (default: "/run/systemd/netif/links")
    #[serde(default = "default_netif_links_path")]
    pub netif_links_path: String,

    /// Public resolvers tried after the discovered ones
    /// (default: ["8.8.8.8", "1.1.1.1", "64.6.64.6"])
    #[serde(default = "default_fallback_resolvers")]
    pub fallback_resolvers: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            probe_timeout: default_probe_timeout(),
            probe_concurrently: default_true(),
            resolv_conf_path: default_resolv_conf_path(),
            sys_class_net_path: default_sys_class_net_path(),
            netif_links_path: default_netif_links_path(),
            fallback_resolvers: default_fallback_resolvers(),
        }
    }
}

fn default_probe_timeout() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}

fn default_resolv_conf_path() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_sys_class_net_path() -> String {
    "/sys/class/net".to_string()
}

fn default_netif_links_path() -> String {
    "/run/systemd/netif/links".to_string()
}

fn default_fallback_resolvers() -> Vec<String> {
    vec![
        "8.8.8.8".to_string(),
        "1.1.1.1".to_string(),
        "64.6.64.6".to_string(),
    ]
}

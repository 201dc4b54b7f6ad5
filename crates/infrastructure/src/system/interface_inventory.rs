use async_trait::async_trait;
use dns_librarian_application::ports::{InterfaceInventory, NetworkInterface};
use dns_librarian_domain::config::DiscoveryConfig;
use dns_librarian_domain::DomainError;
use resolv_conf::ScopedIp;
use std::io;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Name of the pseudo interface carrying the global resolv.conf servers
pub const RESOLV_CONF_INTERFACE: &str = "resolv.conf";

/// Linux interface inventory.
///
/// Interfaces come from `/sys/class/net`, their DNS servers from the
/// systemd-networkd link state files. The servers of `/etc/resolv.conf`
/// are reported last, on a pseudo interface that is always up.
pub struct LinuxInterfaceInventory {
    sys_class_net_path: PathBuf,
    netif_links_path: PathBuf,
    resolv_conf_path: PathBuf,
}

struct LinkInfo {
    name: String,
    index: Option<u32>,
    is_up: bool,
}

impl LinuxInterfaceInventory {
    pub fn new() -> Self {
        Self::from_config(&DiscoveryConfig::default())
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::with_paths(
            &config.sys_class_net_path,
            &config.netif_links_path,
            &config.resolv_conf_path,
        )
    }

    /// Create an inventory over custom paths (useful for testing)
    pub fn with_paths(
        sys_class_net_path: impl Into<PathBuf>,
        netif_links_path: impl Into<PathBuf>,
        resolv_conf_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sys_class_net_path: sys_class_net_path.into(),
            netif_links_path: netif_links_path.into(),
            resolv_conf_path: resolv_conf_path.into(),
        }
    }

    async fn read_links(&self) -> Result<Vec<LinkInfo>, DomainError> {
        let mut entries = match fs::read_dir(&self.sys_class_net_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.sys_class_net_path.display(), "No interface directory");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(DomainError::InterfaceInventory(format!(
                    "Failed to list {}: {}",
                    self.sys_class_net_path.display(),
                    e
                )))
            }
        };

        let mut links = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(DomainError::InterfaceInventory(format!(
                        "Failed to read {}: {}",
                        self.sys_class_net_path.display(),
                        e
                    )))
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            let dir = entry.path();

            let index = read_trimmed(&dir.join("ifindex"))
                .await
                .and_then(|s| s.parse::<u32>().ok());
            let is_up = read_trimmed(&dir.join("operstate"))
                .await
                .map(|state| is_operational(&state))
                .unwrap_or(false);

            links.push(LinkInfo { name, index, is_up });
        }

        // Kernel order; read_dir order is unspecified
        links.sort_by(|a, b| {
            a.index
                .unwrap_or(u32::MAX)
                .cmp(&b.index.unwrap_or(u32::MAX))
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(links)
    }

    async fn link_dns_servers(&self, link: &LinkInfo) -> Vec<IpAddr> {
        let Some(index) = link.index else {
            return Vec::new();
        };

        let path = self.netif_links_path.join(index.to_string());
        match fs::read_to_string(&path).await {
            Ok(content) => parse_link_dns(&content),
            Err(e) => {
                debug!(interface = %link.name, path = %path.display(), error = %e, "No link state file");
                Vec::new()
            }
        }
    }

    async fn resolv_conf_servers(&self) -> Option<Vec<IpAddr>> {
        let content = match fs::read(&self.resolv_conf_path).await {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.resolv_conf_path.display(), error = %e, "resolv.conf not readable");
                return None;
            }
        };

        match resolv_conf::Config::parse(&content) {
            Ok(config) => Some(
                config
                    .nameservers
                    .into_iter()
                    .map(|ns| match ns {
                        ScopedIp::V4(ip) => IpAddr::V4(ip),
                        ScopedIp::V6(ip, _) => IpAddr::V6(ip),
                    })
                    .collect(),
            ),
            Err(e) => {
                warn!(path = %self.resolv_conf_path.display(), error = %e, "Failed to parse resolv.conf");
                None
            }
        }
    }
}

impl Default for LinuxInterfaceInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InterfaceInventory for LinuxInterfaceInventory {
    async fn list_interfaces(&self) -> Result<Vec<NetworkInterface>, DomainError> {
        let links = self.read_links().await?;

        let mut interfaces = Vec::with_capacity(links.len() + 1);
        for link in &links {
            let dns_servers = self.link_dns_servers(link).await;
            interfaces.push(NetworkInterface::new(&link.name, link.is_up, dns_servers));
        }

        if let Some(servers) = self.resolv_conf_servers().await {
            interfaces.push(NetworkInterface::new(RESOLV_CONF_INTERFACE, true, servers));
        }

        debug!(
            interfaces = interfaces.len(),
            servers = interfaces.iter().map(|i| i.dns_servers.len()).sum::<usize>(),
            "Interface inventory read"
        );

        Ok(interfaces)
    }
}

async fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .await
        .ok()
        .map(|s| s.trim().to_string())
}

/// Loopback reports `unknown`, so it counts as operational.
fn is_operational(operstate: &str) -> bool {
    matches!(operstate, "up" | "unknown")
}

/// Servers of the `DNS=` line of a networkd link state file.
///
/// Entries may carry a port or server name suffix (`1.1.1.1:53#one.one.one.one`);
/// only the address is kept.
fn parse_link_dns(content: &str) -> Vec<IpAddr> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("DNS="))
        .flat_map(str::split_whitespace)
        .filter_map(|entry| {
            let entry = entry.split('#').next().unwrap_or(entry);
            match entry.parse::<IpAddr>() {
                Ok(ip) => Some(ip),
                Err(_) => match entry.parse::<std::net::SocketAddr>() {
                    Ok(addr) => Some(addr.ip()),
                    Err(_) => {
                        debug!(entry = entry, "Ignoring unparsable DNS entry");
                        None
                    }
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_dns() {
        let content = "# This is private data. Do not parse.\nADMIN_STATE=configured\nOPER_STATE=routable\nDNS=192.168.1.1 2001:db8::53 9.9.9.9:53#dns.quad9.net\nNTP=\n";
        let servers = parse_link_dns(content);
        assert_eq!(
            servers,
            vec![
                "192.168.1.1".parse::<IpAddr>().unwrap(),
                "2001:db8::53".parse().unwrap(),
                "9.9.9.9".parse().unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_link_dns_without_dns_line() {
        assert!(parse_link_dns("ADMIN_STATE=unmanaged\n").is_empty());
    }

    #[test]
    fn test_operstate() {
        assert!(is_operational("up"));
        assert!(is_operational("unknown"));
        assert!(!is_operational("down"));
        assert!(!is_operational("dormant"));
    }
}

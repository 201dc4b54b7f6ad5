use serde::{Deserialize, Serialize};

/// Domain query configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Per-resolver query timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Resolver port (default: 53)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Retry truncated UDP answers over TCP (default: true)
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,

    /// Accept NXDOMAIN as a final answer instead of trying the next resolver
    /// (default: false)
    #[serde(default)]
    pub stop_on_nxdomain: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            port: default_port(),
            tcp_fallback: default_true(),
            stop_on_nxdomain: false,
        }
    }
}

fn default_timeout() -> u64 {
    5000
}

fn default_port() -> u16 {
    53
}

fn default_true() -> bool {
    true
}

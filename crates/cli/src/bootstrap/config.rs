use dns_librarian_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber is up, so it is visible at `info`.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        query_timeout_ms = config.query.timeout,
        probe_timeout_ms = config.discovery.probe_timeout,
        port = config.query.port,
        fallback_resolvers = config.discovery.fallback_resolvers.len(),
        "Configuration loaded"
    );
}

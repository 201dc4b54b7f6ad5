use super::{ConfigError, DiscoveryConfig, LoggingConfig, QueryConfig};
use crate::ResolverAddress;
use serde::{Deserialize, Serialize};
use std::fs;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub query_timeout: Option<u64>,
    pub probe_timeout: Option<u64>,
}

impl Config {
    /// Load configuration from `config_path` (defaults when `None`) and apply
    /// command line overrides on top.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.query.timeout = timeout;
        }
        if let Some(timeout) = overrides.probe_timeout {
            self.discovery.probe_timeout = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.timeout == 0 {
            return Err(ConfigError::Validation(
                "query.timeout must be greater than 0".into(),
            ));
        }
        if self.query.port == 0 {
            return Err(ConfigError::Validation(
                "query.port must be greater than 0".into(),
            ));
        }
        if self.discovery.probe_timeout == 0 {
            return Err(ConfigError::Validation(
                "discovery.probe_timeout must be greater than 0".into(),
            ));
        }
        if !LoggingConfig::is_valid_level(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }
        self.fallback_resolvers()?;
        Ok(())
    }

    /// Parsed `discovery.fallback_resolvers`, in configured order.
    pub fn fallback_resolvers(&self) -> Result<Vec<ResolverAddress>, ConfigError> {
        self.discovery
            .fallback_resolvers
            .iter()
            .map(|s| s.parse::<ResolverAddress>().map_err(ConfigError::Validation))
            .collect()
    }
}

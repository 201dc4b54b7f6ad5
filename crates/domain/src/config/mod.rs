//! Configuration module for DNS Librarian
//!
//! - `root`: Main configuration and CLI overrides
//! - `discovery`: Resolver discovery and liveness probing
//! - `query`: Domain query settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod discovery;
pub mod errors;
pub mod logging;
pub mod query;
pub mod root;

pub use discovery::DiscoveryConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, Config};

//! # DNS Librarian
//!
//! Finds the system's DNS resolvers and looks a domain up through them,
//! printing the answer grouped by record type.

mod bootstrap;
mod commands;
mod di;
mod output;

use bootstrap::{init_logging, load_config};
use clap::{Parser, Subcommand};
use di::{Adapters, UseCases};
use dns_librarian_domain::{CliOverrides, ConfigError, DomainError, ResolverAddress};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dns-librarian")]
#[command(version)]
#[command(about = "Look up every record of a domain through the local DNS resolvers")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Per-resolver query timeout in milliseconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Liveness probe timeout in milliseconds
    #[arg(long, global = true)]
    probe_timeout: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query a domain and print its records
    Lookup {
        /// Domain name or URL
        domain: String,

        /// Resolver to use instead of discovery (repeatable)
        #[arg(short = 'r', long = "resolver")]
        resolvers: Vec<ResolverAddress>,
    },
    /// Print the reachable resolvers found on this host
    Resolvers,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        query_timeout: cli.timeout,
        probe_timeout: cli.probe_timeout,
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);
    bootstrap::config::log_config(cli.config.as_deref(), &config);

    let fallbacks = config.fallback_resolvers()?;
    let use_cases = UseCases::new(&config, Adapters::new(&config));

    match cli.command {
        Command::Lookup { domain, resolvers } => {
            commands::run_lookup(&use_cases, &domain, &resolvers, &fallbacks, cli.json).await
        }
        Command::Resolvers => commands::run_resolvers(&use_cases, cli.json).await,
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    if let Some(domain_error) = error.downcast_ref::<DomainError>() {
        return match domain_error {
            DomainError::InvalidDomain(_) => 2,
            DomainError::NoResolversFound => 3,
            DomainError::NoValidResponse => 4,
            _ => 1,
        };
    }
    if error.downcast_ref::<ConfigError>().is_some() {
        return 2;
    }
    1
}

use dns_librarian_domain::Config;
use tracing::debug;

/// Logs go to stderr; stdout carries lookup results only.
pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}

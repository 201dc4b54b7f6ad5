use crate::di::UseCases;
use crate::output;
use dns_librarian_domain::{DomainError, ResolverAddress};
use std::collections::HashSet;
use tracing::{info, warn};

/// Resolvers a lookup walks through, in order.
///
/// Explicit resolvers bypass discovery. Otherwise the discovered resolvers
/// come first, followed by the configured fallbacks.
pub async fn resolver_list(
    use_cases: &UseCases,
    explicit: &[ResolverAddress],
    fallbacks: &[ResolverAddress],
) -> Result<Vec<ResolverAddress>, DomainError> {
    if !explicit.is_empty() {
        info!(resolvers = explicit.len(), "Using resolvers from the command line");
        return Ok(dedupe(explicit.iter().copied()));
    }

    match use_cases.discover_resolvers.execute().await {
        Ok(discovered) => Ok(dedupe(discovered.into_iter().chain(fallbacks.iter().copied()))),
        Err(DomainError::NoResolversFound) if !fallbacks.is_empty() => {
            warn!(
                fallbacks = fallbacks.len(),
                "No local resolver answered, using fallback resolvers only"
            );
            Ok(fallbacks.to_vec())
        }
        Err(e) => Err(e),
    }
}

fn dedupe(resolvers: impl IntoIterator<Item = ResolverAddress>) -> Vec<ResolverAddress> {
    let mut seen = HashSet::new();
    resolvers.into_iter().filter(|r| seen.insert(*r)).collect()
}

pub async fn run_resolvers(use_cases: &UseCases, json: bool) -> anyhow::Result<()> {
    let resolvers = use_cases.discover_resolvers.execute().await?;

    if json {
        println!("{}", output::render_resolvers_json(&resolvers)?);
    } else {
        print!("{}", output::render_resolvers_text(&resolvers));
    }
    Ok(())
}

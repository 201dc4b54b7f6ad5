use super::resolver_list;
use crate::di::UseCases;
use crate::output;
use dns_librarian_domain::{DomainName, ResolverAddress};
use tracing::debug;

pub async fn run_lookup(
    use_cases: &UseCases,
    input: &str,
    explicit: &[ResolverAddress],
    fallbacks: &[ResolverAddress],
    json: bool,
) -> anyhow::Result<()> {
    let domain = DomainName::parse(input)?;
    let resolvers = resolver_list(use_cases, explicit, fallbacks).await?;

    debug!(domain = %domain, resolvers = ?resolvers, "Starting lookup");

    let resolved = use_cases.query_domain.resolve(&domain, &resolvers).await?;

    if json {
        println!("{}", output::render_lookup_json(&domain, &resolved)?);
    } else {
        print!("{}", output::render_lookup_text(&domain, &resolved));
    }
    Ok(())
}

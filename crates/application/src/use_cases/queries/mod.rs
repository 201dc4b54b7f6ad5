pub mod query_domain;

pub use query_domain::{QueryDomainUseCase, ResolvedDomain};

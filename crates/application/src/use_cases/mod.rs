pub mod queries;
pub mod resolvers;

pub use queries::{QueryDomainUseCase, ResolvedDomain};
pub use resolvers::{candidate_addresses, DiscoverResolversUseCase};

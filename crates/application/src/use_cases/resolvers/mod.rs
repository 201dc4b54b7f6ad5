pub mod discover;

pub use discover::{candidate_addresses, DiscoverResolversUseCase};

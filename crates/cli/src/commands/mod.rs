pub mod lookup;
pub mod resolvers;

pub use lookup::run_lookup;
pub use resolvers::{resolver_list, run_resolvers};

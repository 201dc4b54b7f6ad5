use dns_librarian_application::ports::{DnsClient, InterfaceInventory, LivenessProbe};
use dns_librarian_application::use_cases::{DiscoverResolversUseCase, QueryDomainUseCase};
use dns_librarian_domain::Config;
use dns_librarian_infrastructure::dns::{DnsLivenessProbe, HickoryDnsClient};
use dns_librarian_infrastructure::system::LinuxInterfaceInventory;
use std::sync::Arc;

/// Adapters behind the application ports
pub struct Adapters {
    pub inventory: Arc<dyn InterfaceInventory>,
    pub probe: Arc<dyn LivenessProbe>,
    pub client: Arc<dyn DnsClient>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        Self {
            inventory: Arc::new(LinuxInterfaceInventory::from_config(&config.discovery)),
            probe: Arc::new(DnsLivenessProbe::new(
                config.discovery.probe_timeout,
                config.query.port,
            )),
            client: Arc::new(HickoryDnsClient::from_config(&config.query)),
        }
    }
}

pub struct UseCases {
    pub discover_resolvers: DiscoverResolversUseCase,
    pub query_domain: QueryDomainUseCase,
}

impl UseCases {
    pub fn new(config: &Config, adapters: Adapters) -> Self {
        Self {
            discover_resolvers: DiscoverResolversUseCase::new(adapters.inventory, adapters.probe)
                .with_concurrent_probing(config.discovery.probe_concurrently),
            query_domain: QueryDomainUseCase::new(adapters.client)
                .with_stop_on_nxdomain(config.query.stop_on_nxdomain),
        }
    }
}

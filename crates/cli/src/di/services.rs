use dohgate_api::AppState;
use dohgate_application::services::DohQueryClient;
use dohgate_application::use_cases::{NslookupUseCase, QueryDohUseCase};
use dohgate_domain::{Config, ResolverId, ResolverRegistry};
use dohgate_infrastructure::doh::ReqwestDohTransport;
use std::sync::Arc;
use std::time::Duration;

pub struct Services {
    pub registry: Arc<ResolverRegistry>,
    pub default_resolver: ResolverId,
    pub query_doh: Arc<QueryDohUseCase>,
    pub nslookup: Arc<NslookupUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(config.resolver_registry()?);
        let default_resolver = registry.resolve_id(&config.doh.default_resolver)?;

        let transport = Arc::new(ReqwestDohTransport::new(
            Duration::from_millis(config.doh.timeout_ms),
            &config.doh.user_agent,
        ));
        let client = DohQueryClient::new(registry.clone(), transport);

        Ok(Self {
            registry,
            default_resolver,
            query_doh: Arc::new(QueryDohUseCase::new(client.clone())),
            nslookup: Arc::new(NslookupUseCase::new(client)),
        })
    }

    pub fn into_app_state(self) -> AppState {
        AppState {
            query_doh: self.query_doh,
            nslookup: self.nslookup,
            registry: self.registry,
            default_resolver: self.default_resolver,
        }
    }
}

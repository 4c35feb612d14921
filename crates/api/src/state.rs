use dohgate_application::use_cases::{NslookupUseCase, QueryDohUseCase};
use dohgate_domain::{ResolverId, ResolverRegistry};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub query_doh: Arc<QueryDohUseCase>,
    pub nslookup: Arc<NslookupUseCase>,
    pub registry: Arc<ResolverRegistry>,
    /// Used by `/nslookup` when no `resolver` parameter is given.
    pub default_resolver: ResolverId,
}

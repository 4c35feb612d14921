use dohgate_domain::{DohDialect, ResolverEndpoint};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ResolverResponse {
    pub name: String,
    pub url: String,
    pub dialect: DohDialect,
}

impl From<&ResolverEndpoint> for ResolverResponse {
    fn from(endpoint: &ResolverEndpoint) -> Self {
        Self {
            name: endpoint.id.to_string(),
            url: endpoint.url(),
            dialect: endpoint.dialect,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

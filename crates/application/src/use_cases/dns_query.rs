use crate::services::DohQueryClient;
use dohgate_domain::{CanonicalAnswer, DomainError, QuerySpec};
use tracing::{instrument, warn};

/// Single-type DoH query. Upstream failures fail the whole call.
pub struct QueryDohUseCase {
    client: DohQueryClient,
}

impl QueryDohUseCase {
    pub fn new(client: DohQueryClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self, spec), fields(name = %spec.name, record_type = %spec.record_type))]
    pub async fn execute(
        &self,
        resolver: &str,
        spec: &QuerySpec,
    ) -> Result<CanonicalAnswer, DomainError> {
        let result = self.client.query(resolver, spec).await;
        if let Err(DomainError::Upstream(failure)) = &result {
            warn!(
                resolver = %failure.resolver,
                status = failure.status,
                status_text = %failure.status_text,
                "DoH query failed"
            );
        }
        result
    }
}

use crate::services::DohQueryClient;
use dohgate_domain::{
    DomainError, LookupResult, LookupSlot, QuerySpec, RecordType, UpstreamFailure, NSLOOKUP_TYPES,
    NSLOOKUP_TYPE_COUNT,
};
use tokio::task::JoinSet;
use tracing::{info, instrument, warn};

/// nslookup fan-out: queries A, AAAA, CNAME, TXT, NS and MX concurrently
/// against one resolver and waits for all of them.
///
/// A failed record type is kept in its own slot and never cancels the
/// others. An unknown resolver or a malformed name fails before any query
/// is sent.
pub struct NslookupUseCase {
    client: DohQueryClient,
}

impl NslookupUseCase {
    pub fn new(client: DohQueryClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, resolver: &str, name: &str) -> Result<LookupResult, DomainError> {
        let endpoint = self.client.endpoint(resolver)?.clone();
        let base = QuerySpec::new(name, RecordType::A)?;

        // Dropping the set aborts every in-flight query, so a cancelled
        // request leaves nothing running.
        let mut tasks = JoinSet::new();
        for (slot, record_type) in NSLOOKUP_TYPES.into_iter().enumerate() {
            let client = self.client.clone();
            let endpoint = endpoint.clone();
            let spec = base.for_type(record_type);
            tasks.spawn(async move { (slot, client.query_endpoint(&endpoint, &spec).await) });
        }

        let mut slots: [Option<LookupSlot>; NSLOOKUP_TYPE_COUNT] = Default::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, result)) => {
                    if let Err(failure) = &result {
                        warn!(
                            resolver = %endpoint.id,
                            record_type = %NSLOOKUP_TYPES[slot],
                            status = failure.status,
                            status_text = %failure.status_text,
                            "nslookup sub-query failed"
                        );
                    }
                    slots[slot] = Some(result.into());
                }
                Err(e) => warn!(error = %e, "nslookup task did not complete"),
            }
        }

        let slots = std::array::from_fn(|idx| {
            slots[idx].take().unwrap_or_else(|| {
                LookupSlot::Failed(UpstreamFailure::new(
                    endpoint.id.as_str(),
                    500,
                    "lookup task did not complete",
                ))
            })
        });

        let result = LookupResult::new(base.name.clone(), endpoint.id.clone(), slots);
        info!(
            resolver = %endpoint.id,
            name = %base.name,
            failed = result.failed_count(),
            "nslookup completed"
        );
        Ok(result)
    }
}

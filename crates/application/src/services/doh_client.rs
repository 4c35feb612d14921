use crate::ports::{DohReply, DohRequest, DohTransport};
use crate::services::normalizer::{NormalizeError, ResponseNormalizer};
use dohgate_domain::{
    CanonicalAnswer, DomainError, QuerySpec, ResolverEndpoint, ResolverRegistry, UpstreamFailure,
};
use std::sync::Arc;
use tracing::debug;

/// Status text used when a 2xx reply does not carry a DoH JSON object.
pub const INVALID_BODY_STATUS_TEXT: &str = "invalid DoH JSON body";

/// Sends single DoH questions and decodes the replies.
///
/// Cheap to clone; the registry and transport are shared read-only.
#[derive(Clone)]
pub struct DohQueryClient {
    registry: Arc<ResolverRegistry>,
    transport: Arc<dyn DohTransport>,
}

impl DohQueryClient {
    pub fn new(registry: Arc<ResolverRegistry>, transport: Arc<dyn DohTransport>) -> Self {
        Self {
            registry,
            transport,
        }
    }

    /// Looks up a resolver and checks that its replies can be normalized.
    /// Never touches the network.
    pub fn endpoint(&self, resolver: &str) -> Result<&ResolverEndpoint, DomainError> {
        let endpoint = self.registry.endpoint_for(resolver)?;
        if !ResponseNormalizer::supports(endpoint.dialect) {
            return Err(DomainError::UnsupportedDialect(format!(
                "{} (resolver {})",
                endpoint.dialect, endpoint.id
            )));
        }
        Ok(endpoint)
    }

    pub async fn query(
        &self,
        resolver: &str,
        spec: &QuerySpec,
    ) -> Result<CanonicalAnswer, DomainError> {
        let endpoint = self.endpoint(resolver)?;
        self.query_endpoint(endpoint, spec)
            .await
            .map_err(DomainError::Upstream)
    }

    /// One GET against an already-validated endpoint. Every failure comes
    /// back as an [`UpstreamFailure`] so fan-out callers can store it in a
    /// slot.
    pub async fn query_endpoint(
        &self,
        endpoint: &ResolverEndpoint,
        spec: &QuerySpec,
    ) -> Result<CanonicalAnswer, UpstreamFailure> {
        let request = DohRequest::build(endpoint, spec);
        debug!(
            resolver = %endpoint.id,
            record_type = %spec.record_type,
            endpoint = %request.endpoint_url,
            params = ?request.params,
            "Sending DoH query"
        );

        let reply = self.transport.get(&request).await?;
        debug!(
            resolver = %endpoint.id,
            record_type = %spec.record_type,
            status = reply.status,
            body_len = reply.body.len(),
            "DoH response received"
        );

        decode_reply(endpoint, &reply)
    }
}

fn decode_reply(
    endpoint: &ResolverEndpoint,
    reply: &DohReply,
) -> Result<CanonicalAnswer, UpstreamFailure> {
    if !reply.is_success() {
        return Err(UpstreamFailure::new(
            endpoint.id.as_str(),
            reply.status,
            reply.status_text.clone(),
        ));
    }

    let invalid_body = || {
        UpstreamFailure::new(endpoint.id.as_str(), reply.status, INVALID_BODY_STATUS_TEXT)
    };

    let raw: serde_json::Value = serde_json::from_slice(&reply.body).map_err(|e| {
        debug!(resolver = %endpoint.id, error = %e, "DoH body is not JSON");
        invalid_body()
    })?;

    ResponseNormalizer::normalize(endpoint.dialect, &raw).map_err(|e| match e {
        NormalizeError::Unsupported(dialect) => UpstreamFailure::new(
            endpoint.id.as_str(),
            500,
            format!("unsupported response dialect {}", dialect),
        ),
        NormalizeError::Malformed(reason) => {
            debug!(resolver = %endpoint.id, reason = %reason, "DoH body has unexpected shape");
            invalid_body()
        }
    })
}

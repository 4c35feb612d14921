use async_trait::async_trait;
use bytes::Bytes;
use dohgate_domain::{QuerySpec, ResolverEndpoint, ResolverId, UpstreamFailure};

/// Media type requested from JSON DoH endpoints.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// One outbound DoH GET: the endpoint URL plus its query parameters.
///
/// Parameters stay structured and are encoded by the transport. The
/// `do`/`cd` flags are present only when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohRequest {
    pub resolver: ResolverId,
    pub endpoint_url: String,
    pub params: Vec<(&'static str, String)>,
}

impl DohRequest {
    pub fn build(endpoint: &ResolverEndpoint, spec: &QuerySpec) -> Self {
        let mut params = Vec::with_capacity(4);
        params.push(("name", spec.name.to_string()));
        params.push(("type", spec.record_type.as_str().to_string()));
        if spec.dnssec_requested {
            params.push(("do", "1".to_string()));
        }
        if spec.validation_disabled {
            params.push(("cd", "1".to_string()));
        }

        Self {
            resolver: endpoint.id.clone(),
            endpoint_url: endpoint.url(),
            params,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw HTTP outcome of a DoH GET.
#[derive(Debug, Clone)]
pub struct DohReply {
    pub status: u16,
    pub status_text: String,
    pub body: Bytes,
}

impl DohReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes DoH GET requests.
///
/// Implementations send exactly one request per call, with
/// `accept: application/dns-json` and no body, and never retry. Failures
/// that produce no HTTP response are reported as an [`UpstreamFailure`]
/// with a gateway status (502, or 504 on timeout).
#[async_trait]
pub trait DohTransport: Send + Sync {
    async fn get(&self, request: &DohRequest) -> Result<DohReply, UpstreamFailure>;
}

//! DoH JSON transport over reqwest.
//!
//! Every query is a single GET with the question in the query string:
//! ```text
//! GET /dns-query?name=example.com&type=A HTTP/1.1
//! Accept: application/dns-json
//! ```
//! Non-2xx replies are returned as-is; the caller decides what they mean.

use async_trait::async_trait;
use dohgate_application::ports::{DohReply, DohRequest, DohTransport, DNS_JSON_CONTENT_TYPE};
use dohgate_domain::UpstreamFailure;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

/// DoH JSON transport backed by a pooled reqwest client.
///
/// Cloning shares the connection pool.
#[derive(Clone)]
pub struct ReqwestDohTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestDohTransport {
    /// An unusable `user_agent` falls back to reqwest's default agent; the
    /// timeout is kept either way.
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = build_client(timeout, Some(user_agent))
            .or_else(|e| {
                warn!(
                    error = %e,
                    user_agent,
                    "Invalid DoH client settings, retrying with default user agent"
                );
                build_client(timeout, None)
            })
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to build DoH client, using reqwest defaults");
                reqwest::Client::new()
            });

        Self { client, timeout }
    }

    fn gateway_failure(request: &DohRequest, err: &reqwest::Error) -> UpstreamFailure {
        let status = if err.is_timeout() {
            StatusCode::GATEWAY_TIMEOUT
        } else {
            StatusCode::BAD_GATEWAY
        };
        debug!(
            resolver = %request.resolver,
            url = %request.endpoint_url,
            error = %err,
            "DoH request produced no response"
        );
        synthetic_failure(request, status)
    }
}

fn build_client(timeout: Duration, user_agent: Option<&str>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(timeout)
        .pool_max_idle_per_host(4);
    if let Some(user_agent) = user_agent {
        builder = builder.user_agent(user_agent);
    }
    builder.build()
}

fn synthetic_failure(request: &DohRequest, status: StatusCode) -> UpstreamFailure {
    UpstreamFailure::new(
        request.resolver.as_str(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown"),
    )
}

#[async_trait]
impl DohTransport for ReqwestDohTransport {
    async fn get(&self, request: &DohRequest) -> Result<DohReply, UpstreamFailure> {
        let http_request = self
            .client
            .get(&request.endpoint_url)
            .header(ACCEPT, DNS_JSON_CONTENT_TYPE)
            .query(&request.params)
            .build()
            .map_err(|e| Self::gateway_failure(request, &e))?;

        debug!(
            resolver = %request.resolver,
            url = %http_request.url(),
            "Sending DoH request"
        );

        // The client timeout covers connect and headers; the outer one also
        // bounds the body read.
        let exchange = async {
            let response = self.client.execute(http_request).await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| synthetic_failure(request, StatusCode::GATEWAY_TIMEOUT))?
            .map_err(|e| Self::gateway_failure(request, &e))?;

        debug!(
            resolver = %request.resolver,
            status = status.as_u16(),
            response_len = body.len(),
            "DoH response received"
        );

        Ok(DohReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use bytes::Bytes;
use dohgate_api::{create_api_routes, AppState};
use dohgate_application::ports::{DohReply, DohRequest, DohTransport};
use dohgate_application::services::DohQueryClient;
use dohgate_application::use_cases::{NslookupUseCase, QueryDohUseCase};
use dohgate_domain::{ResolverRegistry, UpstreamFailure};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Answers every type with a one-record body unless a status override is
/// set for it.
#[derive(Clone, Default)]
pub struct MockDohTransport {
    status_overrides: Arc<Mutex<HashMap<String, u16>>>,
    requests: Arc<Mutex<Vec<DohRequest>>>,
    calls: Arc<AtomicUsize>,
}

impl MockDohTransport {
    pub fn fail_type(&self, record_type: &str, status: u16) {
        self.status_overrides
            .lock()
            .unwrap()
            .insert(record_type.to_string(), status);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<DohRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl DohTransport for MockDohTransport {
    async fn get(&self, request: &DohRequest) -> Result<DohReply, UpstreamFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let name = request.param("name").unwrap_or_default();
        let record_type = request.param("type").unwrap_or("A");
        if let Some(status) = self.status_overrides.lock().unwrap().get(record_type) {
            return Ok(DohReply {
                status: *status,
                status_text: "Service Unavailable".to_string(),
                body: Bytes::new(),
            });
        }

        let body = json!({
            "Status": 0,
            "RD": true,
            "RA": true,
            "Question": [{"name": format!("{name}."), "type": 1}],
            "Answer": [{"name": format!("{name}."), "type": 1, "TTL": 300, "data": "93.184.216.34"}]
        });
        Ok(DohReply {
            status: 200,
            status_text: "OK".to_string(),
            body: Bytes::from(body.to_string()),
        })
    }
}

pub fn create_test_app(transport: &MockDohTransport) -> Router {
    let registry = Arc::new(ResolverRegistry::builtin());
    let client = DohQueryClient::new(registry.clone(), Arc::new(transport.clone()));
    let default_resolver = registry.resolve_id("cloudflare").unwrap();

    create_api_routes(AppState {
        query_doh: Arc::new(QueryDohUseCase::new(client.clone())),
        nslookup: Arc::new(NslookupUseCase::new(client)),
        registry,
        default_resolver,
    })
}

pub async fn get_json(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

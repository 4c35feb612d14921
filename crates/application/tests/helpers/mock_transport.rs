use async_trait::async_trait;
use bytes::Bytes;
use dohgate_application::ports::{DohReply, DohRequest, DohTransport};
use dohgate_domain::UpstreamFailure;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// Scripted transport keyed by the `type` query parameter.
#[derive(Clone, Default)]
pub struct MockDohTransport {
    replies: Arc<Mutex<HashMap<String, Result<DohReply, UpstreamFailure>>>>,
    default_reply: Arc<Mutex<Option<DohReply>>>,
    requests: Arc<Mutex<Vec<DohRequest>>>,
    calls: Arc<AtomicUsize>,
    barrier: Option<Arc<Barrier>>,
}

impl MockDohTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request waits until `parties` requests are in flight.
    pub fn with_barrier(parties: usize) -> Self {
        Self {
            barrier: Some(Arc::new(Barrier::new(parties))),
            ..Self::default()
        }
    }

    pub fn set_json(&self, record_type: &str, body: Value) {
        self.set_reply(record_type, 200, "OK", body.to_string());
    }

    pub fn set_reply(&self, record_type: &str, status: u16, status_text: &str, body: String) {
        self.replies.lock().unwrap().insert(
            record_type.to_string(),
            Ok(DohReply {
                status,
                status_text: status_text.to_string(),
                body: Bytes::from(body),
            }),
        );
    }

    pub fn set_failure(&self, record_type: &str, failure: UpstreamFailure) {
        self.replies
            .lock()
            .unwrap()
            .insert(record_type.to_string(), Err(failure));
    }

    /// Reply used for any record type without a scripted reply.
    pub fn set_default_json(&self, body: Value) {
        *self.default_reply.lock().unwrap() = Some(DohReply {
            status: 200,
            status_text: "OK".to_string(),
            body: Bytes::from(body.to_string()),
        });
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<DohRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DohTransport for MockDohTransport {
    async fn get(&self, request: &DohRequest) -> Result<DohReply, UpstreamFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let record_type = request.param("type").unwrap_or("A").to_string();
        let scripted = self.replies.lock().unwrap().get(&record_type).cloned();
        match scripted {
            Some(reply) => reply,
            None => self.default_reply.lock().unwrap().clone().ok_or_else(|| {
                UpstreamFailure::new(request.resolver.as_str(), 404, "no fixture")
            }),
        }
    }
}

/// Transport whose requests never complete. Tracks how many are still
/// alive so tests can observe cancellation.
#[derive(Clone, Default)]
pub struct BlockingTransport {
    in_flight: Arc<AtomicUsize>,
    started: Arc<AtomicUsize>,
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl BlockingTransport {
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DohTransport for BlockingTransport {
    async fn get(&self, _request: &DohRequest) -> Result<DohReply, UpstreamFailure> {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.started.fetch_add(1, Ordering::SeqCst);
        let _guard = InFlightGuard(self.in_flight.clone());
        tokio::time::sleep(Duration::from_secs(3600)).await;
        unreachable!("blocking transport never completes")
    }
}

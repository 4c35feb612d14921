use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Local HTTP server standing in for a DoH JSON resolver.
///
/// Routes:
/// - `/dns-query` answers with a DoH JSON body echoing the request
/// - `/unavailable` always returns 503
/// - `/html` returns a 200 with a non-JSON body
/// - `/slow` waits five seconds before answering
/// - `/user-agent` echoes the `user-agent` header as plain text
pub struct MockDohServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let app = Router::new()
            .route("/dns-query", get(dns_query))
            .route("/unavailable", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/html", get(|| async { "<html>not dns</html>" }))
            .route("/user-agent", get(user_agent))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    StatusCode::OK
                }),
            );

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// A loopback URL nothing listens on.
    pub fn closed_url() -> String {
        "http://127.0.0.1:9/dns-query".to_string()
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn dns_query(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let name = params.get("name").cloned().unwrap_or_default();
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let body = json!({
        "Status": 0,
        "RD": true,
        "RA": true,
        "Question": [{"name": format!("{name}."), "type": 1}],
        "Answer": [{"name": format!("{name}."), "type": 1, "TTL": 300, "data": "93.184.216.34"}],
        "Comment": format!(
            "accept={accept};type={};do={};cd={}",
            params.get("type").map(String::as_str).unwrap_or("-"),
            params.get("do").map(String::as_str).unwrap_or("-"),
            params.get("cd").map(String::as_str).unwrap_or("-"),
        ),
    });

    ([(header::CONTENT_TYPE, "application/dns-json")], Json(body))
}

async fn user_agent(headers: HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

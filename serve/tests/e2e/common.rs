//! Shared helpers for e2e tests. Received bodies are logged with `[e2e] received: ...`.

use std::sync::Arc;
use std::time::Duration;

use affirm::{AffirmationGenerator, AffirmationService};
use serve::{router, run_serve_on_listener, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

pub const ORIGIN: &str = "http://localhost:3000";

/// A running server. Dropping it without [`TestServer::stop`] leaves the task to the runtime.
pub struct TestServer {
    pub base: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<Result<(), Box<dyn std::error::Error + Send + Sync>>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

/// Binds 127.0.0.1:0 and serves `generator` with the given upstream timeout.
pub async fn spawn_server_with_timeout(
    generator: Arc<dyn AffirmationGenerator>,
    timeout: Duration,
) -> TestServer {
    let service = AffirmationService::new(generator, timeout);
    let app = router(AppState::new(Arc::new(service)), ORIGIN).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(run_serve_on_listener(listener, app, async move {
        let _ = rx.await;
    }));
    TestServer {
        base: format!("http://{}", addr),
        shutdown: Some(tx),
        handle,
    }
}

pub async fn spawn_server(generator: Arc<dyn AffirmationGenerator>) -> TestServer {
    spawn_server_with_timeout(generator, Duration::from_secs(20)).await
}

/// POSTs `body` as JSON to `/api/affirmation`; returns (status, parsed body).
pub async fn post_affirmation(
    server: &TestServer,
    body: serde_json::Value,
) -> (u16, serde_json::Value) {
    let resp = reqwest::Client::new()
        .post(server.url("/api/affirmation"))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap();
    eprintln!("[e2e] received: {} {}", status, text);
    (status, serde_json::from_str(&text).unwrap())
}

/// Reads one HTTP request from the stream (head + content-length body).
pub async fn read_http_request(stream: &mut TcpStream) {
    let mut buf = Vec::new();
    let mut tmp = [0u8; 1024];
    loop {
        let n = stream.read(&mut tmp).await.unwrap();
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&tmp[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let header_end = pos + 4;
            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let lower = line.to_ascii_lowercase();
                    lower
                        .strip_prefix("content-length:")
                        .and_then(|v| v.trim().parse::<usize>().ok())
                })
                .unwrap_or(0);
            let mut have = buf.len() - header_end;
            while have < content_length {
                let m = stream.read(&mut tmp).await.unwrap();
                if m == 0 {
                    break;
                }
                have += m;
            }
            return;
        }
    }
}

/// Mock OpenAI upstream that answers every request with `status` and `body`.
/// Returns its base URL and the accept-loop task.
pub async fn spawn_upstream(
    status: &'static str,
    body: &'static str,
) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            read_http_request(&mut stream).await;
            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes()).await;
        }
    });
    (format!("http://{}", addr), handle)
}

mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use serde_json::json;
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

#[tokio::test]
async fn test_every_response_has_request_id() {
    let server = common::make_server();

    let ok = server.get("/users").await;
    let bad = server.get("/users/abc").await;
    let created = server
        .post("/users")
        .json(&json!({ "name": "Alice", "dob": "1990-05-10" }))
        .await;

    for response in [&ok, &bad, &created] {
        let value = response.header("x-request-id");
        assert!(!value.is_empty());
    }
}

#[tokio::test]
async fn test_request_ids_are_unique() {
    let server = common::make_server();

    let mut seen = HashSet::new();
    for _ in 0..20 {
        let response = server.get("/users").await;
        let id = response.header("x-request-id").to_str().unwrap().to_string();
        assert!(seen.insert(id), "duplicate request id");
    }
}

#[tokio::test]
async fn test_incoming_request_id_is_replaced() {
    let server = common::make_server();

    let response = server
        .get("/users")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("client-chosen"),
        )
        .await;

    assert_ne!(response.header("x-request-id"), "client-chosen");
}

#[tokio::test]
async fn test_unknown_route_is_tagged() {
    let server = common::make_server();

    let response = server.get("/nope").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(!response.header("x-request-id").is_empty());
    assert_eq!(response.json::<serde_json::Value>()["error"], "route not found");
}

#[tokio::test]
async fn test_wrong_method_has_json_error() {
    let server = common::make_server();

    let response = server.patch("/users/1").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert!(!response.header("x-request-id").is_empty());
    assert_eq!(response.json::<serde_json::Value>(), json!({ "error": "method not allowed" }));
}

#[tokio::test]
async fn test_slow_request_times_out_with_json_error() {
    let repo = common::InMemoryUserRepository::slow(Duration::from_secs(2));
    let server = common::make_server_with_timeout(repo, Duration::from_millis(100));

    let response = server.get("/users").await;

    response.assert_status(StatusCode::REQUEST_TIMEOUT);
    assert!(!response.header("x-request-id").is_empty());
    assert_eq!(response.json::<serde_json::Value>(), json!({ "error": "request timeout" }));
}

#[tokio::test]
async fn test_access_log_carries_request_id_and_status() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = common::make_server();
    let response = server.get("/users/abc").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let request_id = response.header("x-request-id").to_str().unwrap().to_string();

    let output = logs.contents();
    let line = output
        .lines()
        .find(|line| line.contains("http_request"))
        .unwrap_or_else(|| panic!("no access log entry in:\n{output}"));

    assert!(line.contains(&format!("request_id={request_id}")), "{line}");
    assert!(line.contains("method=GET"), "{line}");
    assert!(line.contains("path=/users/abc"), "{line}");
    assert!(line.contains("status=400"), "{line}");
    assert!(line.contains("latency_ms="), "{line}");
}

/// Shared in-memory sink for a test subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

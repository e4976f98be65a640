//! Per-request access logging.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use super::request_id::RequestId;

/// Logs one structured event per request once the response is ready.
///
/// # Fields
///
/// - `request_id` - correlation id set by [`super::request_id::layer`]
/// - `method`, `path` - from the request line
/// - `status` - final response status, including error responses
/// - `latency_ms` - time spent downstream of this middleware
///
/// # Example Logs
///
/// ```text
/// INFO http_request request_id=5b0c... method=GET path=/users/1 status=200 latency_ms=3
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;

    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "http_request"
    );

    response
}

//! Top-level router configuration.
//!
//! # Middleware
//!
//! Applied to every request, matched or not, outermost first:
//!
//! - **Request id** - Correlation id in request extensions and `X-Request-ID`
//! - **Access log** - One structured entry with status and latency
//! - **Error body** - `{"error": ...}` for bare 405 and 408 replies
//! - **Timeout** - Aborts requests running past the configured limit (408)

use crate::api;
use crate::api::middleware::{access_log, error_body, request_id};
use crate::error::AppError;
use crate::state::AppState;
use axum::{Router, http::StatusCode, middleware};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound for handling one request; when it fires the
///   handler future is dropped, cancelling any in-flight query
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    let timeout = TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout);

    Router::new()
        .merge(api::routes::user_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id::layer))
                .layer(middleware::from_fn(access_log::layer))
                .layer(middleware::map_response(error_body::layer))
                .layer(timeout),
        )
}

async fn route_not_found() -> AppError {
    AppError::not_found("route not found")
}

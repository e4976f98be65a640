//! HTTP middleware for request processing.
//!
//! - [`request_id`] - Correlation id generation and `X-Request-ID` header
//! - [`access_log`] - One structured log entry per request
//! - [`error_body`] - JSON error body for 405 and 408 replies

pub mod access_log;
pub mod error_body;
pub mod request_id;

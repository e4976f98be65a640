//! JSON bodies for responses produced outside the handlers.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Gives bare-status replies from the router and the timeout layer the same
/// `{"error": ...}` body as every other error.
///
/// Covers 405 (path matched, method did not) and 408 (request timeout). Other
/// headers of the original response, such as `Allow`, are kept.
pub async fn layer(response: Response) -> Response {
    if response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let error = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed,
        StatusCode::REQUEST_TIMEOUT => AppError::Timeout,
        _ => return response,
    };

    let (mut parts, _) = response.into_parts();
    let (json_parts, body) = error.into_response().into_parts();

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);

    Response::from_parts(parts, body)
}

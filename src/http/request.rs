//! Request identification and tracing spans.
//!
//! Every request gets an `x-request-id` (UUID v4 unless the client sent
//! one), which is recorded on its trace span and echoed on the response.

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use tracing::Span;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The request ID header value, if present and valid UTF-8.
pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(X_REQUEST_ID).and_then(|v| v.to_str().ok())
}

/// Span wrapping one request/response exchange.
pub fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = request_id(request.headers()).unwrap_or("unknown"),
    )
}

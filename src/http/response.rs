//! Response handlers.
//!
//! # Responsibilities
//! - Serve the route's template with status 200
//! - Answer `OPTIONS` on the route with its `Allow` set
//! - Redirect unclean paths onto the route, otherwise 404
//!
//! # Design Decisions
//! - Templates are `&'static str`, so the body is `text/plain; charset=utf-8`
//! - 404 has an empty body
//! - Only methods the route serves (GET and HEAD) are redirected (301); the
//!   path is never decoded
//! - OPTIONS and axum's 405 report the same `Allow` set

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::routing::{clean_path, RouteRule};

/// Handler for the single registered route.
pub async fn serve_template(State(rule): State<RouteRule>) -> impl IntoResponse {
    (StatusCode::OK, rule.template().as_str())
}

/// Automatic `OPTIONS` reply for the registered path.
pub async fn options(State(rule): State<RouteRule>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::ALLOW, allow_header(&rule))],
    )
}

/// Router fallback for paths with no registered route.
pub async fn fallback(State(rule): State<RouteRule>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    let cleaned = clean_path(path);

    if cleaned != path && rule.matches(&method, &cleaned) {
        let location = match uri.query() {
            Some(query) => format!("{cleaned}?{query}"),
            None => cleaned.into_owned(),
        };
        tracing::debug!(from = %path, to = %location, "Redirecting to clean path");
        return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
    }

    tracing::debug!(method = %method, path = %path, "No route matched");
    StatusCode::NOT_FOUND.into_response()
}

/// `Allow` value in axum's 405 format, e.g. `GET,HEAD,OPTIONS`.
fn allow_header(rule: &RouteRule) -> String {
    rule.allowed_methods()
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

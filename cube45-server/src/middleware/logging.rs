//! Request logging middleware
//!
//! One line per finished request: request id, method, matched route, status
//! and latency. The request id comes from `SetRequestIdLayer`, which sits
//! outside this middleware.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tower_http::request_id::RequestId;

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let method = req.method().clone();
    // Route template keeps ids and names out of the log key
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::warn!(%request_id, %method, %route, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::info!(%request_id, %method, %route, status, latency_ms, "Request rejected");
    } else {
        tracing::debug!(%request_id, %method, %route, status, latency_ms, "Request served");
    }

    response
}

//! Fixed-window rate limiting for the reservation confirmation routes
//!
//! Lookup and cancel take only a name and a phone number, so they are
//! throttled per client IP to slow down guessing.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::error::AppError;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Windows idle for this long are dropped by [`RateLimiter::cleanup`]
const STALE_AFTER: Duration = Duration::from_secs(300);

struct Window {
    started: Instant,
    hits: u32,
}

/// Per-IP request counter over fixed windows
#[derive(Clone)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Arc<Mutex<HashMap<String, Window>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    /// Count one request from `ip`; `false` once the window budget is spent
    pub async fn check(&self, ip: &str) -> bool {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;
        let window = clients.entry(ip.to_owned()).or_insert(Window {
            started: now,
            hits: 0,
        });

        if now.duration_since(window.started) >= self.window {
            window.started = now;
            window.hits = 0;
        }

        window.hits = window.hits.saturating_add(1);
        window.hits <= self.max_requests
    }

    pub async fn cleanup(&self) {
        let now = Instant::now();
        let mut clients = self.clients.lock().await;
        let before = clients.len();
        clients.retain(|_, w| now.duration_since(w.started) < STALE_AFTER);
        tracing::debug!(removed = before - clients.len(), "Rate limiter cleanup");
    }

    #[cfg(test)]
    async fn tracked_ips(&self) -> usize {
        self.clients.lock().await.len()
    }
}

/// Client IP. The first X-Forwarded-For entry is only honoured when the
/// server sits behind a trusted proxy; clients can set the header freely.
fn extract_ip(request: &Request, trust_proxy: bool) -> String {
    if trust_proxy {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|ip| !ip.is_empty());
        if let Some(ip) = forwarded {
            return ip.to_owned();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

/// Rate limit middleware for reservation lookup/cancel
pub async fn reservation_rate_limit(
    State(state): State<crate::state::AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let ip = extract_ip(&request, state.trust_proxy);
    if !state.rate_limiter.check(&ip).await {
        tracing::warn!(ip = %ip, path = %request.uri().path(), "Reservation request rate limited");
        return Err(AppError::too_many_requests().into_response());
    }
    Ok(next.run(request).await)
}

//! Fixed-window throttling of mutating requests.
//!
//! One counter is shared by every client. Safe methods (GET, HEAD, OPTIONS)
//! are never counted, so listings and CORS preflights always go through.

use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tokio::sync::Mutex;

use crate::state::AppState;

/// Message returned with `429 Too Many Requests`.
pub const THROTTLED_MESSAGE: &str = "Too many requests, please try again later.";

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Allows at most `max_requests` acquisitions per `window`.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    current: Mutex<Option<Window>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            current: Mutex::new(None),
        }
    }

    /// Record one request. Returns `false` if the current window is full.
    pub async fn try_acquire(&self) -> bool {
        self.try_acquire_at(Instant::now()).await
    }

    async fn try_acquire_at(&self, now: Instant) -> bool {
        let mut current = self.current.lock().await;

        let expired = current
            .as_ref()
            .map_or(true, |window| now.saturating_duration_since(window.started) >= self.window);
        if expired {
            *current = Some(Window {
                started: now,
                count: 0,
            });
        }

        let Some(window) = current.as_mut() else {
            return false;
        };
        if window.count >= self.max_requests {
            return false;
        }
        window.count += 1;
        true
    }
}

/// Reject mutating requests over the limit with `429`.
pub async fn throttle_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method().is_safe() {
        return next.run(request).await;
    }

    if !state.rate_limiter.try_acquire().await {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Request throttled"
        );
        let body = json!({
            "error": THROTTLED_MESSAGE,
            "code": "RATE_LIMITED",
        });
        return (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    }

    next.run(request).await
}

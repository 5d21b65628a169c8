use std::sync::Arc;

use scenebook_db::DocumentStore;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The scene document store.
    pub store: Arc<DocumentStore>,
    /// Shared limiter for mutating requests.
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(store: DocumentStore, config: &ServerConfig) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit.window, config.rate_limit.max_requests);
        Self {
            store: Arc::new(store),
            rate_limiter: Arc::new(rate_limiter),
        }
    }
}

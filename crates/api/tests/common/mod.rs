#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use scenebook_api::config::{RateLimitConfig, ServerConfig, StorageConfig};
use scenebook_api::router::build_app_router;
use scenebook_api::state::AppState;
use scenebook_core::types::StoreMode;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

/// Build a test `ServerConfig` storing scenes under `dir`.
///
/// Uses a wildcard CORS origin and a rate limit high enough that ordinary
/// tests never hit it.
pub fn test_config(dir: PathBuf, mode: StoreMode) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig {
            dir,
            mode,
            schema: mode.default_schema(),
        },
        rate_limit: RateLimitConfig {
            window: Duration::from_secs(1),
            max_requests: 10_000,
        },
    }
}

/// A running app plus the temp dir backing its store.
///
/// Keep the `TempDir` alive for as long as the app is used.
pub struct TestApp {
    pub dir: TempDir,
    pub router: Router,
}

impl TestApp {
    /// A fresh clone of the router, ready for one `oneshot`.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Path of the scene document on disk.
    pub fn document_path(&self) -> PathBuf {
        self.dir.path().join(scenebook_db::DOCUMENT_FILENAME)
    }
}

/// Build the full application router over a fresh temp store.
pub async fn build_test_app(mode: StoreMode) -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = test_config(dir.path().to_path_buf(), mode);
    build_test_app_with(dir, config).await
}

/// Build the full application router from an explicit config.
pub async fn build_test_app_with(dir: TempDir, config: ServerConfig) -> TestApp {
    let store = scenebook_db::open_store(
        &config.storage.dir,
        config.storage.mode,
        config.storage.schema,
    )
    .await
    .expect("open store");
    let state = AppState::new(store, &config);
    TestApp {
        dir,
        router: build_app_router(state, &config),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

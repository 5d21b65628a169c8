use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use scenebook_core::error::CoreError;
use scenebook_core::types::{SceneSchema, StoreMode};

/// Where and how scenes are stored.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding `scenes.json`.
    pub dir: PathBuf,
    pub mode: StoreMode,
    pub schema: SceneSchema,
}

/// Fixed-window limit on mutating requests.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: u32,
}

/// Server configuration loaded from environment variables.
///
/// Everything except the storage directory has a default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5003`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` mirrors whatever origin the request came from.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                              |
    /// |---------------------------|--------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                            |
    /// | `PORT`                    | `5003`                               |
    /// | `CORS_ORIGINS`            | `*`                                  |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                 |
    /// | `SCENES_DB_DIR`           | required                             |
    /// | `SCENES_MODE`             | `grouped`                            |
    /// | `SCENES_SCHEMA`           | `rich` if grouped, `simple` if flat  |
    /// | `RATE_LIMIT_WINDOW_MS`    | `1000`                               |
    /// | `RATE_LIMIT_MAX_REQUESTS` | `1`                                  |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_var(&lookup, "PORT", 5003)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let dir = lookup("SCENES_DB_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(CoreError::MissingConfiguration("SCENES_DB_DIR"))?;
        let mode: StoreMode = parse_var(&lookup, "SCENES_MODE", StoreMode::Grouped)?;
        let schema: SceneSchema = parse_var(&lookup, "SCENES_SCHEMA", mode.default_schema())?;

        let window_ms: u64 = parse_var(&lookup, "RATE_LIMIT_WINDOW_MS", 1000)?;
        let max_requests: u32 = parse_var(&lookup, "RATE_LIMIT_MAX_REQUESTS", 1)?;
        if max_requests == 0 {
            return Err(CoreError::InvalidConfiguration(
                "RATE_LIMIT_MAX_REQUESTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage: StorageConfig { dir, mode, schema },
            rate_limit: RateLimitConfig {
                window: Duration::from_millis(window_ms),
                max_requests,
            },
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, CoreError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| CoreError::InvalidConfiguration(format!("{key}: {e}"))),
    }
}

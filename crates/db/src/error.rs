use std::path::PathBuf;

use scenebook_core::error::CoreError;
use scenebook_core::types::StoreMode;

/// Errors raised by the document store and repositories.
///
/// Domain failures pass through as [`StoreError::Core`]; the remaining
/// variants are storage problems the caller cannot fix by changing input.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed scene document {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode scene document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Scene document {} is {found} but the store is configured as {expected}", path.display())]
    ModeMismatch {
        path: PathBuf,
        expected: StoreMode,
        found: StoreMode,
    },
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

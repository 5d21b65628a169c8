//! Scenebook persistence: the JSON document store and its repositories.

use std::path::Path;

use scenebook_core::types::{SceneSchema, StoreMode};

pub mod error;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use store::{DocumentStore, DOCUMENT_FILENAME};

/// Open the store in `dir`, creating an empty document if none exists.
pub async fn open_store(
    dir: impl AsRef<Path>,
    mode: StoreMode,
    schema: SceneSchema,
) -> Result<DocumentStore, StoreError> {
    let store = DocumentStore::new(dir, mode, schema);
    store.bootstrap().await?;
    Ok(store)
}

/// Verify the document can be read and matches the configured mode.
pub async fn health_check(store: &DocumentStore) -> Result<(), StoreError> {
    store.load().await.map(|_| ())
}
